use crate::analysis::EVENT_PUBLISH_MARKER;
use crate::models::EventSite;

/// Display label attached to every detected event site
pub const SUBSCRIBE_LABEL: &str = "🔔 Subscribe";

/// Parser for contract event publication lines
#[derive(Debug, Default)]
pub struct EventParser;

impl EventParser {
    pub fn new() -> Self {
        Self
    }

    /// Return one site per line whose trimmed content starts with
    /// `env.events()`. Chained publishes split over several lines count once,
    /// on the line carrying the marker.
    pub fn extract_event_sites(&self, text: &str) -> Vec<EventSite> {
        text.split('\n')
            .enumerate()
            .filter(|(_, line)| line.trim().starts_with(EVENT_PUBLISH_MARKER))
            .map(|(index, line)| EventSite {
                line_number: index + 1,
                label: SUBSCRIBE_LABEL.to_string(),
                leading_indent: Self::leading_indent(line),
            })
            .collect()
    }

    fn leading_indent(line: &str) -> usize {
        line.chars().take_while(|c| c.is_whitespace()).count()
    }
}
