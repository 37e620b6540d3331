use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::config::Tab;
use crate::ui::outcome::BrowseOutcome;
use crate::ui::state::App;

impl<'a> App<'a> {
    /// Process a keyboard event and return an outcome if the user exits.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
        match key.code {
            KeyCode::Esc => {
                return Ok(Some(BrowseOutcome {
                    accepted: false,
                    selection: None,
                    query: self.query_input.text().to_string(),
                }));
            }
            KeyCode::Enter => {
                let selection = self.current_selection();
                return Ok(Some(BrowseOutcome {
                    accepted: true,
                    selection,
                    query: self.query_input.text().to_string(),
                }));
            }
            KeyCode::Tab => {
                self.set_tab(self.tab().next());
            }
            KeyCode::BackTab => {
                self.set_tab(self.tab().previous());
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cycle_region();
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cycle_locality();
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cycle_industry();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_risk_notes();
            }
            // Remaining keys drive the browse tab only.
            _ if self.tab() == Tab::Browse => match key.code {
                KeyCode::Up => {
                    self.move_selection(-1);
                }
                KeyCode::Down => {
                    self.move_selection(1);
                }
                KeyCode::PageUp => {
                    self.scroll_detail_up(10);
                }
                KeyCode::PageDown => {
                    self.scroll_detail_down(10);
                }
                _ => {
                    if self.query_input.input(key) {
                        self.refresh_listing();
                    }
                }
            },
            _ => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Directory;
    use crate::listing::SpeedClass;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn sample_app() -> App<'static> {
        App::new(Directory::bundled())
    }

    #[test]
    fn escape_cancels_without_a_selection() {
        let mut app = sample_app();

        let outcome = app
            .handle_key(key(KeyCode::Esc))
            .expect("handle key")
            .expect("outcome produced");

        assert!(!outcome.accepted);
        assert!(outcome.selection.is_none());
    }

    #[test]
    fn enter_accepts_the_selected_agency() {
        let mut app = sample_app();

        let outcome = app
            .handle_key(key(KeyCode::Enter))
            .expect("handle key")
            .expect("outcome produced");

        assert!(outcome.accepted);
        let selection = outcome.selection.expect("selection present");
        assert_eq!(selection.agency, "Silver State Staffing");
        assert_eq!(selection.class, SpeedClass::Fast);
    }

    #[test]
    fn tab_keys_cycle_the_tabs_both_ways() {
        let mut app = sample_app();

        app.handle_key(key(KeyCode::Tab)).expect("handle key");
        assert_eq!(app.tab(), Tab::Compare);

        app.handle_key(key(KeyCode::BackTab)).expect("handle key");
        assert_eq!(app.tab(), Tab::Browse);

        app.handle_key(key(KeyCode::BackTab)).expect("handle key");
        assert_eq!(app.tab(), Tab::Feedback);
    }

    #[test]
    fn control_keys_cycle_location_and_filter() {
        let mut app = sample_app();

        app.handle_key(ctrl('r')).expect("handle key");
        assert_eq!(app.region().map(|region| region.code.as_str()), Some("TX"));

        app.handle_key(ctrl('f')).expect("handle key");
        assert!(!app.industry().is_all());

        app.handle_key(ctrl('n')).expect("handle key");
        assert!(app.show_risk_notes());
    }

    #[test]
    fn typed_characters_filter_the_listing() {
        let mut app = sample_app();
        assert_eq!(app.filtered_len(), 2);

        for ch in "desert".chars() {
            app.handle_key(key(KeyCode::Char(ch))).expect("handle key");
        }

        assert_eq!(app.query(), "desert");
        assert_eq!(app.filtered_len(), 1);
    }

    #[test]
    fn arrows_move_the_selection_within_bounds() {
        let mut app = sample_app();

        app.handle_key(key(KeyCode::Down)).expect("handle key");
        assert_eq!(app.table_state.selected(), Some(1));

        app.handle_key(key(KeyCode::Down)).expect("handle key");
        assert_eq!(app.table_state.selected(), Some(1));

        app.handle_key(key(KeyCode::Up)).expect("handle key");
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn typing_is_ignored_outside_the_browse_tab() {
        let mut app = sample_app();
        app.set_tab(Tab::Compare);

        app.handle_key(key(KeyCode::Char('x'))).expect("handle key");

        assert_eq!(app.query(), "");
        assert_eq!(app.filtered_len(), 2);
    }

    #[test]
    fn global_toggles_work_from_any_tab() {
        let mut app = sample_app();
        app.set_tab(Tab::Feedback);

        app.handle_key(ctrl('n')).expect("handle key");

        assert!(app.show_risk_notes());
    }
}
