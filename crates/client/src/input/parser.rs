//! Turns a typed line into a [`Command`].
//!
//! The first word is the verb. Whole-word aliases are expanded first (`n`
//! becomes `move north`), otherwise the verb is completed from a unique
//! prefix of the known vocabulary. Everything after the verb is passed on as
//! a raw query; the session resolves it against what is in scope.

use game_core::{ActionError, Command, ShopOrder, StorageOrder};

/// Every verb the console understands, hideout and raid alike.
pub const VERBS: &[&str] = &[
    "move",
    "look",
    "get",
    "drop",
    "equip",
    "unequip",
    "use",
    "attack",
    "search",
    "examine",
    "rest",
    "flee",
    "extract",
    "inventory",
    "stats",
    "help",
    "quit",
    "shop",
    "storage",
    "start_raid",
];

const ALIASES: &[(&str, &str)] = &[
    ("n", "move north"),
    ("e", "move east"),
    ("s", "move south"),
    ("w", "move west"),
    ("ne", "move northeast"),
    ("nw", "move northwest"),
    ("se", "move southeast"),
    ("sw", "move southwest"),
    ("inv", "inventory"),
    ("stat", "stats"),
    ("ex", "examine"),
    ("h", "help"),
    ("q", "quit"),
    ("l", "look"),
    ("stash", "storage"),
    ("raid", "start_raid"),
];

const SHOP_ORDERS: &[&str] = &["browse", "buy", "sell"];
const STORAGE_ORDERS: &[&str] = &["browse", "deposit", "withdraw"];

/// Parses one console line.
///
/// Unknown or ambiguous verbs and missing arguments come back as
/// [`ActionError::InvalidCommand`], which never costs a raid turn.
pub fn parse(line: &str) -> Result<Command, ActionError> {
    let (word, rest) = split_word(line.trim());
    if word.is_empty() {
        return Err(ActionError::invalid("type 'help' for a list of commands"));
    }
    let word = word.to_lowercase();

    let (verb, arg) = match ALIASES.iter().find(|(alias, _)| *alias == word) {
        Some((_, expansion)) => {
            let (verb, implied) = split_word(expansion);
            match (implied.is_empty(), rest.is_empty()) {
                (true, _) => (verb, rest),
                (false, true) => (verb, implied),
                (false, false) => {
                    return Err(ActionError::invalid(format!("'{word}' takes no argument")));
                }
            }
        }
        None => (complete(&word, VERBS, "command")?, rest),
    };

    let command = match verb {
        "move" => Command::Move(required(verb, arg)?),
        "look" => Command::Look,
        "get" => Command::Get(required(verb, arg)?),
        "drop" => Command::Drop(required(verb, arg)?),
        "equip" => Command::Equip(required(verb, arg)?),
        "unequip" => Command::Unequip(required(verb, arg)?),
        "use" => Command::Use(required(verb, arg)?),
        "attack" => Command::Attack(required(verb, arg)?),
        "search" => Command::Search(required(verb, arg)?),
        "examine" => Command::Examine(required(verb, arg)?),
        "rest" => Command::Rest,
        "flee" => Command::Flee(required(verb, arg)?),
        "extract" => Command::Extract,
        "inventory" => Command::Inventory,
        "stats" => Command::Stats,
        "help" => Command::Help,
        "quit" => Command::Quit,
        "shop" => Command::Shop(shop_order(arg)?),
        "storage" => Command::Storage(storage_order(arg)?),
        "start_raid" => Command::StartRaid,
        other => return Err(ActionError::invalid(format!("unknown command '{other}'"))),
    };
    Ok(command)
}

/// Expands a direction alias (`ne`) to the exit name (`northeast`).
pub fn expand_direction(word: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .and_then(|(_, expansion)| expansion.strip_prefix("move "))
        .unwrap_or(word)
}

/// Resolves `word` to one of `candidates`: exact match first, then a unique
/// prefix.
pub fn complete<'a>(word: &str, candidates: &[&'a str], what: &str) -> Result<&'a str, ActionError> {
    if let Some(exact) = candidates.iter().find(|candidate| **candidate == word) {
        return Ok(exact);
    }
    let matches: Vec<&'a str> = candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.starts_with(word))
        .collect();
    match matches.as_slice() {
        [only] => Ok(only),
        [] => Err(ActionError::invalid(format!(
            "unknown {what} '{word}', type 'help' for a list of commands"
        ))),
        _ => Err(ActionError::invalid(format!(
            "ambiguous {what} '{word}', did you mean: {}?",
            matches.join(", ")
        ))),
    }
}

fn shop_order(arg: &str) -> Result<ShopOrder, ActionError> {
    let (word, rest) = split_word(arg);
    if word.is_empty() {
        return Ok(ShopOrder::Browse);
    }
    let order = match complete(&word.to_lowercase(), SHOP_ORDERS, "shop order")? {
        "buy" => ShopOrder::Buy(required("shop buy", rest)?),
        "sell" => ShopOrder::Sell(required("shop sell", rest)?),
        _ => ShopOrder::Browse,
    };
    Ok(order)
}

fn storage_order(arg: &str) -> Result<StorageOrder, ActionError> {
    let (word, rest) = split_word(arg);
    if word.is_empty() {
        return Ok(StorageOrder::Browse);
    }
    let order = match complete(&word.to_lowercase(), STORAGE_ORDERS, "storage order")? {
        "deposit" => StorageOrder::Deposit(required("storage deposit", rest)?),
        "withdraw" => StorageOrder::Withdraw(required("storage withdraw", rest)?),
        _ => StorageOrder::Browse,
    };
    Ok(order)
}

fn required(verb: &str, arg: &str) -> Result<String, ActionError> {
    if arg.is_empty() {
        return Err(ActionError::invalid(format!("'{verb}' needs a target")));
    }
    Ok(arg.to_owned())
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}
