//! `states-list` presentation command
//!
//! Renders every stored state as an HTML list, sorted by name. Written
//! against the façade contract only, so it works on either backend.

use hbnb_core::{Entity, EntityKind, State, StorageEngine};
use hbnb_store::Storage;

use crate::error::ConsoleError;

/// Execute the states-list command
pub fn states_list(storage: &mut Storage) -> Result<String, ConsoleError> {
    let mut states: Vec<State> = storage
        .all(Some(EntityKind::State))?
        .into_values()
        .filter_map(Entity::into_model::<State>)
        .collect();
    states.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(render_states(&states))
}

/// HTML page listing `states` in the given order
pub fn render_states(states: &[State]) -> String {
    let mut html = String::from(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n  <head>\n    <title>HBNB</title>\n  </head>\n  <body>\n    <h1>States</h1>\n    <ul>\n",
    );
    for state in states {
        html.push_str(&format!(
            "      <li>{}: <B>{}</B></li>\n",
            escape(state.base.id()),
            escape(&state.name)
        ));
    }
    html.push_str("    </ul>\n  </body>\n</html>");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
