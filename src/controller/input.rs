//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Detail overlay swallows input while open; all three dismiss
        // keys must land in the same hidden state
        if model.is_detail_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    model.close_detail().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        model.cycle_section_backward().await;
                    } else {
                        model.cycle_section_forward().await;
                    }
                    return Ok(());
                }
                KeyCode::Enter => {
                    // Skip the quiet period and search right away
                    drop(model);
                    self.refresh_now().await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.update_search_query(String::new()).await;
                    drop(model);
                    self.schedule_refresh().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    drop(model);
                    self.schedule_refresh().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    drop(model);
                    self.schedule_refresh().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Filter changes are not debounced; they re-run the refresh
        // decision against the current text immediately
        if ui_state.active_section == ActiveSection::Filter {
            match key.code {
                KeyCode::Left | KeyCode::Up => {
                    model.cycle_filter_backward().await;
                    drop(model);
                    self.refresh_now().await;
                    return Ok(());
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Enter => {
                    model.cycle_filter_forward().await;
                    drop(model);
                    self.refresh_now().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle results list navigation
        if ui_state.active_section == ActiveSection::Results {
            match key.code {
                KeyCode::Up => {
                    model.content_move_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.content_move_down().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    if let Some(record) = model.get_selected_record().await {
                        model.open_detail(record).await;
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crossterm::event::{KeyCode, KeyEvent};
    use tokio::sync::Mutex;

    use crate::controller::AppController;
    use crate::model::{AppModel, DisplayRecord, MediaKind, TmdbClient};

    fn record() -> DisplayRecord {
        DisplayRecord {
            title: "Heat".to_string(),
            year: "1995".to_string(),
            kind: MediaKind::Movie,
            overview: "Sin descripción.".to_string(),
            poster_url: "https://via.placeholder.com/300x450?text=No+Image".to_string(),
        }
    }

    fn controller() -> AppController {
        AppController::new(Arc::new(Mutex::new(AppModel::new())), TmdbClient::new(""))
    }

    // Every dismiss key leaves the overlay in the identical hidden state
    #[tokio::test]
    async fn all_dismiss_keys_close_the_detail_overlay() {
        let controller = controller();

        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Backspace] {
            {
                let model = controller.model.lock().await;
                model.open_detail(record()).await;
            }
            controller.handle_key_event(KeyEvent::from(code)).await.unwrap();

            let model = controller.model.lock().await;
            let state = model.get_detail_state().await;
            assert!(!state.visible);
            assert_eq!(state.record.as_ref().unwrap().title, "Heat");
        }
    }

    #[tokio::test]
    async fn typing_arms_the_debouncer_and_edits_the_query() {
        let controller = controller();

        for c in ['b', 'a', 't'] {
            controller
                .handle_key_event(KeyEvent::from(KeyCode::Char(c)))
                .await
                .unwrap();
        }

        let model = controller.model.lock().await;
        assert_eq!(model.get_ui_state().await.search_query, "bat");
        drop(model);

        // The burst armed a single pending deadline
        let mut debouncer = controller.debouncer.lock().await;
        assert!(debouncer.fire_due(
            std::time::Instant::now() + crate::controller::DEBOUNCE_DELAY
        ));
        assert!(!debouncer.fire_due(
            std::time::Instant::now() + crate::controller::DEBOUNCE_DELAY
        ));
    }

    #[tokio::test]
    async fn enter_on_a_result_opens_the_detail_overlay() {
        let controller = controller();
        {
            let model = controller.model.lock().await;
            model.apply_results(vec![record()]).await;
            // Move focus to the results list
            model.cycle_section_forward().await;
            model.cycle_section_forward().await;
        }

        controller
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .await
            .unwrap();

        let model = controller.model.lock().await;
        let state = model.get_detail_state().await;
        assert!(state.visible);
        assert_eq!(state.record.unwrap().title, "Heat");
    }
}
