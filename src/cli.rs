//! Line commands understood by the terminal front end.

use listings_client::domain::FilterUpdate;
use listings_client::infrastructure::listing_id_from_fragment;
use listings_client::{AppState, Event, ViewMode};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Events to dispatch in order.
    Dispatch(Vec<Event>),
    /// Step the history back.
    Back,
    /// Subscribe an email to the current filters.
    Subscribe(String),
    /// Print the subscription list.
    ListSubscriptions,
    Help,
    Quit,
}

pub const HELP: &str = "\
filters:     search <text> | category <c> | min <price> | max <price> | county <c> | city <c>
             unsold | active (toggle)
listings:    fetch | next | prev | reset | grid | list
detail:      open <id | #listing-id> | back
alerts:      subscribe <email> | subs | unsubscribe <id>
other:       help | quit";

/// Assigns a filter and fetches with it, like editing a filter input.
fn filter(update: FilterUpdate) -> Command {
    Command::Dispatch(vec![Event::SetFilter(update), Event::FetchListings])
}

/// Accepts a bare id or a `#listing-{id}` deep link.
fn parse_id(arg: &str) -> Result<i64, String> {
    arg.parse()
        .ok()
        .or_else(|| listing_id_from_fragment(arg))
        .ok_or_else(|| format!("expected a numeric id, got {arg:?}"))
}

/// Parses a line against the current state.
///
/// Toggle commands read the current flag from `state`. Blank lines parse to
/// `Ok(None)`.
pub fn parse(line: &str, state: &AppState) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, arg)| (name, arg.trim()));

    let command = match name {
        "search" => filter(FilterUpdate::Search(arg.to_string())),
        "category" => filter(FilterUpdate::Category(arg.to_string())),
        "min" => filter(FilterUpdate::MinPrice(arg.to_string())),
        "max" => filter(FilterUpdate::MaxPrice(arg.to_string())),
        "county" => filter(FilterUpdate::County(arg.to_string())),
        "city" => filter(FilterUpdate::City(arg.to_string())),
        "unsold" => filter(FilterUpdate::StatusUnsold(!state.filters.status_unsold)),
        "active" => filter(FilterUpdate::StatusActive(!state.filters.status_active)),

        "fetch" => Command::Dispatch(vec![Event::FetchListings]),
        "next" => Command::Dispatch(vec![Event::NextPage]),
        "prev" => Command::Dispatch(vec![Event::PrevPage]),
        "reset" => Command::Dispatch(vec![Event::ResetFilters]),
        "grid" => Command::Dispatch(vec![Event::SetDisplayMode(ViewMode::Grid)]),
        "list" => Command::Dispatch(vec![Event::SetDisplayMode(ViewMode::List)]),

        "open" => Command::Dispatch(vec![Event::OpenListingById(parse_id(arg)?)]),
        "back" => Command::Back,

        "subscribe" if arg.is_empty() => return Err("usage: subscribe <email>".to_string()),
        "subscribe" => Command::Subscribe(arg.to_string()),
        "subs" => Command::ListSubscriptions,
        "unsubscribe" => Command::Dispatch(vec![Event::DeleteSubscription { id: parse_id(arg)? }]),

        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(Some(command))
}

/// One-line description of the listings screen.
pub fn summary(state: &AppState) -> String {
    let view = match state.view {
        ViewMode::Grid => "grid",
        ViewMode::List => "list",
        ViewMode::Detail => "detail",
    };
    format!(
        "[{view}] page {} · {} listings{}",
        state.filters.page,
        state.listings.len(),
        if state.loading { " · loading" } else { "" }
    )
}

/// Lines describing what the current view shows.
pub fn render(state: &AppState) -> Vec<String> {
    if let Some(listing) = &state.selected_listing {
        let mut lines = vec![format!("#{} {}", listing.id, listing.title().unwrap_or("(untitled)"))];
        lines.extend(
            listing
                .attributes
                .iter()
                .filter(|(key, _)| key.as_str() != "title")
                .map(|(key, value)| format!("  {key}: {value}")),
        );
        return lines;
    }

    state
        .listings
        .iter()
        .map(|listing| {
            let place = [listing.city(), listing.county()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");
            match state.view {
                ViewMode::List => format!("{:>6}  {}", listing.id, listing.title().unwrap_or("(untitled)")),
                _ => format!(
                    "#{} {} | {} | {} | {} | {}",
                    listing.id,
                    listing.title().unwrap_or("(untitled)"),
                    listing.category().unwrap_or("-"),
                    place,
                    listing.starting_price().unwrap_or("-"),
                    listing.auction_status().unwrap_or("-"),
                ),
            }
        })
        .collect()
}
