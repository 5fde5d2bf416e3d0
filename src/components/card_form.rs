//! Card Form - add/edit modal with live preview
//!
//! Renders the board's open editor. Every keystroke goes to
//! `BoardState::update_field`; validation only runs on submit.

use cardcourt_core::{BoardError, CardDraft, DraftField};
use cardcourt_ui::{CloseButton, Input, TextArea};
use dioxus::prelude::*;

use crate::context::use_board;

/// Preview image used until the draft holds a valid URL
pub const PREVIEW_PLACEHOLDER: &str = "https://via.placeholder.com/300?text=Previsualizar+Imagen";

/// Text shown in the preview for a draft field, with placeholders for
/// the empty ones.
fn preview_text(draft: &CardDraft, field: DraftField) -> String {
    let value = draft.display_value(field);
    if !value.is_empty() {
        return value;
    }
    match field {
        DraftField::Name => "Nombre".to_string(),
        DraftField::Description => "Descripción corta...".to_string(),
        _ => String::new(),
    }
}

/// Fields rendered as single-line inputs, with their DOM ids
fn single_line_fields() -> impl Iterator<Item = (DraftField, &'static str)> {
    DraftField::all()
        .iter()
        .copied()
        .filter(|field| *field != DraftField::Description)
        .map(|field| (field, field.input_id()))
}

/// Editor modal; renders nothing while no editor is open
#[component]
pub fn CardForm() -> Element {
    let mut board = use_board();
    let Some(editor) = board.read().editor().cloned() else {
        return rsx! {};
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let result = board.write().submit();
        match result {
            Ok(_) | Err(BoardError::Validation(_)) => {}
            Err(BoardError::CardNotFound(number)) => {
                tracing::warn!(number, "Card deleted while being edited, closing editor");
                board.write().close_editor();
            }
            Err(err) => tracing::error!("Failed to save card: {}", err),
        }
    };

    let title = editor.title();
    let submit_label = editor.submit_label();
    let error = editor.error;
    let draft = editor.draft;
    let preview_src = draft
        .preview_image()
        .unwrap_or(PREVIEW_PLACEHOLDER)
        .to_string();
    let preview_name = preview_text(&draft, DraftField::Name);
    let preview_description = preview_text(&draft, DraftField::Description);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| board.write().close_editor(),

            div {
                class: "card-form",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    class: "close-btn--accent".to_string(),
                    onclick: move |_| board.write().close_editor(),
                }

                form {
                    class: "card-form__fields",
                    onsubmit: on_submit,

                    h3 { class: "card-form__title", "{title}" }

                    for (field, input_id) in single_line_fields() {
                        Input {
                            key: "{input_id}",
                            id: input_id.to_string(),
                            label: field.label().to_string(),
                            input_type: if field.is_numeric() { "number".to_string() } else { "text".to_string() },
                            value: draft.display_value(field),
                            oninput: move |raw: String| board.write().update_field(field, &raw),
                            required: true,
                        }
                    }

                    TextArea {
                        id: DraftField::Description.input_id().to_string(),
                        label: DraftField::Description.label().to_string(),
                        value: draft.description.clone(),
                        oninput: move |raw: String| board.write().update_field(DraftField::Description, &raw),
                        rows: 3,
                        required: true,
                    }

                    if let Some(err) = error {
                        div { class: "form-error",
                            strong { "Por favor rellene los campos" }
                            ": {err}"
                        }
                    }

                    button {
                        class: "btn-primary card-form__submit",
                        r#type: "submit",
                        "{submit_label}"
                    }
                }

                // Live preview
                div { class: "card-form__preview",
                    div { class: "preview-card",
                        h4 { class: "preview-card__heading", "Vista Previa" }
                        img {
                            class: "preview-card__img",
                            src: "{preview_src}",
                            alt: "Previsualización",
                        }
                        p { class: "preview-card__name", "{preview_name}" }
                        p { class: "preview-card__description",
                            "Descripción: {preview_description}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_uses_placeholders_for_empty_draft() {
        let draft = CardDraft::blank();
        assert_eq!(preview_text(&draft, DraftField::Name), "Nombre");
        assert_eq!(
            preview_text(&draft, DraftField::Description),
            "Descripción corta..."
        );
        assert_eq!(draft.preview_image().unwrap_or(PREVIEW_PLACEHOLDER), PREVIEW_PLACEHOLDER);
    }

    #[test]
    fn description_is_not_a_single_line_field() {
        let ids: Vec<&str> = single_line_fields().map(|(_, id)| id).collect();
        assert_eq!(ids, vec!["nombre", "tipo", "ataque", "defensa", "vida", "imagen"]);
    }

    #[test]
    fn preview_shows_typed_values() {
        let mut draft = CardDraft::blank();
        draft.set_field(DraftField::Name, "Kenma");
        draft.set_field(DraftField::Image, "https://example.com/k.png");
        assert_eq!(preview_text(&draft, DraftField::Name), "Kenma");
        assert_eq!(draft.preview_image(), Some("https://example.com/k.png"));
    }
}
