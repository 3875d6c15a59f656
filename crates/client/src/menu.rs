//! Console menus.
//!
//! Menus hold no rules. Every choice is resolved through [`GameSession`] and
//! the player's managers; this module only prompts and prints results.

use std::io::{self, BufRead, Write};

use rpg_core::{Item, ItemId, ItemOutcome, Selection};

use crate::console::Console;
use crate::session::GameSession;

/// Answer to the start screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainChoice {
    Start,
    Exit,
}

/// Shows the start screen until the user starts or exits.
///
/// End of input counts as exit.
pub fn main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<MainChoice> {
    console.title("Welcome to the RPG Game!")?;
    console.option("1. Start Game")?;
    console.option("2. Exit")?;

    loop {
        let Some(input) = console.read_line()? else {
            return Ok(MainChoice::Exit);
        };
        match input.trim() {
            "1" => {
                console.success("Starting game...")?;
                return Ok(MainChoice::Start);
            }
            "2" => {
                console.error("Exiting game...")?;
                return Ok(MainChoice::Exit);
            }
            _ => console.error("Invalid selection. Please choose 1 or 2.")?,
        }
    }
}

/// Top-level loop once the game has started.
pub fn game_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    console.success(format!("{} has entered the game.", session.player().name))?;

    loop {
        console.option("Choose an action:")?;
        console.option("1. Inventory")?;
        console.option("2. Quit")?;

        let Some(input) = console.read_line()? else {
            tracing::info!("input closed, leaving game loop");
            return Ok(());
        };
        match input.trim() {
            "1" => inventory_menu(console, session)?,
            "2" => {
                console.error("Exiting game...")?;
                return Ok(());
            }
            _ => console.error("Invalid selection. Please choose 1 or 2.")?,
        }
    }
}

/// Inventory management until the user goes back.
pub fn inventory_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    loop {
        console.option("\nInventory Management:")?;
        console.option("1. Display inventory")?;
        console.option("2. Search for item by name")?;
        console.option("3. List items by type")?;
        console.option("4. Sort items (submenu)")?;
        console.option("5. Equip item")?;
        console.option("6. Use item")?;
        console.option("7. Remove item")?;
        console.option("8. Browse world items (search/add)")?;
        console.option("9. Show status")?;
        console.option("0. Back")?;

        let Some(input) = console.read_line()? else {
            return Ok(());
        };
        match input.trim() {
            "0" => return Ok(()),
            "1" => display_inventory(console, session)?,
            "2" => search_inventory(console, session)?,
            "3" => list_by_type(console, session)?,
            "4" => sort_menu(console, session)?,
            "5" => equip(console, session)?,
            "6" => use_item(console, session)?,
            "7" => remove(console, session)?,
            "8" => browse_world(console, session)?,
            "9" => show_status(console, session)?,
            _ => console.error("Invalid selection.")?,
        }
    }
}

fn display_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> io::Result<()> {
    let items = session.player().sort_by_name();
    if items.is_empty() {
        return console.notice("Inventory is empty.");
    }
    for item in &items {
        console.line(full_line(item))?;
    }
    Ok(())
}

fn search_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> io::Result<()> {
    let query = console.prompt("Search query: ")?.unwrap_or_default();
    if query.trim().is_empty() {
        return console.notice("Search cancelled.");
    }

    let results = session.player().search_items(&query);
    if results.is_empty() {
        return console.notice("No items found.");
    }
    for item in &results {
        console.line(format!("{}: {}", item.id, item.name))?;
    }
    Ok(())
}

fn list_by_type<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> io::Result<()> {
    let groups = session.player().list_items_by_type();
    if groups.is_empty() {
        return console.notice("No items to list.");
    }
    for group in &groups {
        console.line(format!("Type: {}", group.kind))?;
        for item in &group.items {
            console.line(format!("  {}: {}", item.id, item.name))?;
        }
    }
    Ok(())
}

fn sort_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> io::Result<()> {
    console.option("\nSort Options:")?;
    console.option("1. Sort by Name")?;
    console.option("2. Sort by Attack Value")?;
    console.option("3. Sort by Defense Value")?;

    let player = session.player();
    let sorted = match console.read_line()?.as_deref().map(str::trim) {
        Some("1") => player.sort_by_name(),
        Some("2") => player.sort_by_attack(),
        Some("3") => player.sort_by_defense(),
        _ => player.items().to_vec(),
    };

    if sorted.is_empty() {
        return console.notice("No items to sort.");
    }
    for item in &sorted {
        console.line(format!(
            "{}: {} Atk:{} Def:{}",
            item.id, item.name, item.attack, item.defense
        ))?;
    }
    Ok(())
}

fn equip<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    let Some(item) = choose_item(console, session, ItemAction::Equip)? else {
        return Ok(());
    };
    let outcome = session.player_mut().equip_item_by_id(item.id);
    report(console, &outcome)
}

fn use_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    let Some(item) = choose_item(console, session, ItemAction::Use)? else {
        return Ok(());
    };
    let outcome = session.player_mut().use_item_by_id(item.id);
    report(console, &outcome)
}

fn remove<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    let action = ItemAction::Remove;
    let Some(item) = choose_item(console, session, action)? else {
        return Ok(());
    };

    let confirm = console
        .prompt(format!("Confirm removal of '{}'? (y/N): ", item.name))?
        .unwrap_or_default();
    if !confirm.trim().eq_ignore_ascii_case("y") {
        return console.notice(action.cancelled());
    }

    if !session.player_mut().remove_item_by_id(item.id) {
        return console.error("Failed to remove item.");
    }

    console.success(format!("Removed '{}'.", item.name))?;
    let remaining = session.player().sort_by_name();
    if remaining.is_empty() {
        return console.notice("Inventory is now empty.");
    }
    console.option("Updated inventory:")?;
    for item in &remaining {
        console.line(action.describe(item))?;
    }
    Ok(())
}

fn browse_world<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
) -> io::Result<()> {
    let Some(query) = console.prompt("Search world items (leave empty for sample): ")? else {
        return Ok(());
    };

    let world_items = session.find_world_items(&query);
    if world_items.is_empty() {
        return console.notice("No world items found.");
    }
    for item in &world_items {
        console.line(full_line(item))?;
    }

    let input = console
        .prompt("Enter item Id to add to your inventory (or blank to cancel): ")?
        .unwrap_or_default();
    if input.trim().is_empty() {
        return console.notice("Add cancelled.");
    }
    let Ok(id) = input.trim().parse::<u32>() else {
        return console.error("Invalid Id.");
    };

    let outcome = session.try_add_item_by_id(ItemId(id));
    report(console, &outcome)
}

fn show_status<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
) -> io::Result<()> {
    let player = session.player();
    let equipment = player.equipment();
    let weapon = equipment.and_then(|e| e.weapon.as_ref());
    let armor = equipment.and_then(|e| e.armor.as_ref());

    console.title(format!(
        "{}  Health:{}  XP:{}",
        player.name, player.health, player.experience
    ))?;
    console.line(match weapon {
        Some(item) => format!("Weapon: {} (Atk:{})", item.name, item.attack),
        None => "Weapon: none".to_string(),
    })?;
    console.line(match armor {
        Some(item) => format!("Armor: {} (Def:{})", item.name, item.defense),
        None => "Armor: none".to_string(),
    })?;
    console.line(format!(
        "Attack:{} Defense:{}",
        player.total_attack(),
        player.total_defense()
    ))?;
    console.line(format!(
        "Weight: {} / {}",
        player.total_weight(),
        player.max_weight()
    ))
}

#[derive(Clone, Copy, Debug)]
enum ItemAction {
    Equip,
    Use,
    Remove,
}

impl ItemAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Equip => "equip",
            Self::Use => "use",
            Self::Remove => "remove",
        }
    }

    fn cancelled(self) -> &'static str {
        match self {
            Self::Equip => "Equip cancelled.",
            Self::Use => "Use cancelled.",
            Self::Remove => "Remove cancelled.",
        }
    }

    fn describe(self, item: &Item) -> String {
        match self {
            Self::Equip => format!(
                "{}: {} (Atk:{} Def:{})",
                item.id, item.name, item.attack, item.defense
            ),
            Self::Use => format!("{}: {} (Type:{})", item.id, item.name, item.kind),
            Self::Remove => format!(
                "{}: {} (Type:{} Atk:{} Def:{})",
                item.id, item.name, item.kind, item.attack, item.defense
            ),
        }
    }
}

/// Lists the inventory, then resolves an id, name or partial name to one item.
fn choose_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
    action: ItemAction,
) -> io::Result<Option<Item>> {
    let player = session.player();
    let listed = player.sort_by_name();
    if listed.is_empty() {
        console.notice(format!("Inventory is empty. Nothing to {}.", action.verb()))?;
        return Ok(None);
    }

    console.option("Current inventory:")?;
    for item in &listed {
        console.line(action.describe(item))?;
    }

    let query = console
        .prompt(format!(
            "Enter item Id, exact name, or partial name to {} (blank to cancel): ",
            action.verb()
        ))?
        .unwrap_or_default();
    if query.trim().is_empty() {
        console.notice(action.cancelled())?;
        return Ok(None);
    }

    match player.select(&query) {
        Selection::Single(item) => Ok(Some(item)),
        Selection::None if query.trim().parse::<u32>().is_ok() => {
            console.notice("No item with that Id in your inventory.")?;
            Ok(None)
        }
        Selection::None => {
            console.notice("No items match that name or partial.")?;
            Ok(None)
        }
        Selection::Ambiguous(candidates) => pick_candidate(console, action, candidates),
    }
}

fn pick_candidate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    action: ItemAction,
    mut candidates: Vec<Item>,
) -> io::Result<Option<Item>> {
    console.option("Multiple matches found:")?;
    for (index, item) in candidates.iter().enumerate() {
        console.line(format!("{}. {}", index + 1, action.describe(item)))?;
    }

    let pick = console
        .prompt(format!(
            "Enter the number of the item to {} (or blank to cancel): ",
            action.verb()
        ))?
        .unwrap_or_default();
    if pick.trim().is_empty() {
        console.notice(action.cancelled())?;
        return Ok(None);
    }

    match pick.trim().parse::<usize>() {
        Ok(number) if (1..=candidates.len()).contains(&number) => {
            Ok(Some(candidates.swap_remove(number - 1)))
        }
        _ => {
            console.error(format!("Invalid selection. {}", action.cancelled()))?;
            Ok(None)
        }
    }
}

fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: &ItemOutcome,
) -> io::Result<()> {
    tracing::debug!(outcome = outcome.as_str(), "item action");
    if outcome.is_success() {
        console.success(outcome)
    } else {
        console.notice(outcome)
    }
}

fn full_line(item: &Item) -> String {
    format!(
        "{}: {} Type:{} Atk:{} Def:{} Wt:{} Val:{}",
        item.id, item.name, item.kind, item.attack, item.defense, item.weight, item.value
    )
}
