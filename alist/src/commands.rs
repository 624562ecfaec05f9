/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{fmt::{Display, Formatter, Result},
          sync::{Arc,
                 atomic::{AtomicUsize, Ordering}}};

use miette::IntoDiagnostic;
use r3bl_action_list::{ActionListError, AmbientScopes, CommonResult, ComposedItem,
                       EventPropagation, IdAllocator, InputEvent, ListConfig,
                       SelectOutcome, ok};

use crate::OutputFormat;

/// Composes every item of `config` in order, sharing one [`IdAllocator`] so the
/// generated ids are unique across the list.
#[must_use]
pub fn compose_all(config: &ListConfig) -> Vec<ComposedItem> {
    let scopes = config.scopes();
    let mut ids = IdAllocator::default();
    config
        .build_items()
        .iter()
        .map(|item| item.compose(&scopes, &mut ids))
        .collect()
}

pub fn try_render(config: &ListConfig, format: OutputFormat) -> CommonResult<String> {
    let composed = compose_all(config);
    match format {
        OutputFormat::Markup => ok!(
            composed
                .iter()
                .map(|it| it.root.pretty_print())
                .collect::<String>()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&composed).into_diagnostic(),
    }
}

/// What happened when one event was pushed through an item's select gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectReport {
    pub key: String,
    pub event: InputEvent,
    pub propagation: EventPropagation,
    pub handler_calls: usize,
    pub after_select_calls: usize,
}

impl Display for SelectReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let verdict = match self.propagation {
            EventPropagation::ConsumedRender => "consumed, container closed",
            EventPropagation::Consumed => "consumed",
            _ => "propagated",
        };
        write!(
            f,
            "{key} <- {event}: {verdict} (handler calls: {handler}, after select calls: {hook})",
            key = self.key,
            event = self.event,
            handler = self.handler_calls,
            hook = self.after_select_calls,
        )
    }
}

/// Sends `event` to the item with `key`. The item gets a handler that counts its calls
/// and returns [`SelectOutcome::NotHandled`], and the container (when the document has
/// one) gets an after select hook that counts its calls.
///
/// # Errors
///
/// [`ActionListError::UnknownItem`] if no item has `key`.
pub fn try_select(
    config: &ListConfig,
    key: &str,
    event: InputEvent,
) -> CommonResult<SelectReport> {
    let handler_calls = Arc::new(AtomicUsize::new(0));
    let after_select_calls = Arc::new(AtomicUsize::new(0));

    let Some(item) = config
        .build_items()
        .into_iter()
        .find(|it| it.key.0 == key)
    else {
        return Err(ActionListError::UnknownItem {
            key: key.to_string(),
        }
        .into());
    };

    let mut item = item.with_on_select({
        let handler_calls = handler_calls.clone();
        move |event| {
            handler_calls.fetch_add(1, Ordering::SeqCst);
            // % is Display, ? is Debug.
            tracing::info!(message = "Select handler ran", event = %event);
            ok!(SelectOutcome::NotHandled)
        }
    });

    let container = config.container.clone().map(|it| {
        let after_select_calls = after_select_calls.clone();
        it.with_after_select(move || {
            after_select_calls.fetch_add(1, Ordering::SeqCst);
            tracing::info!(message = "After select hook ran");
        })
    });

    let scopes = AmbientScopes {
        container: container.as_ref(),
        ..config.scopes()
    };

    let propagation = item.handle_event(&event, &scopes)?;

    ok!(SelectReport {
        key: key.to_string(),
        event,
        propagation,
        handler_calls: handler_calls.load(Ordering::SeqCst),
        after_select_calls: after_select_calls.load(Ordering::SeqCst),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const DOCUMENT: &str = r#"{
        "list": {"selection_variant": "single"},
        "container": {"kind": "ActionMenu"},
        "items": [
            {"key": "copy", "children": [{"type": "text", "value": "Copy"}]},
            {"key": "paste", "disabled": true,
             "children": [{"type": "text", "value": "Paste"}]},
            {"key": "share", "inactive_text": "Sharing is offline",
             "children": [{"type": "text", "value": "Share"}]}
        ]
    }"#;

    fn config() -> ListConfig { ListConfig::try_from_str(DOCUMENT).unwrap() }

    #[test]
    fn test_compose_all_ids_are_unique() {
        let composed = compose_all(&config());
        let ids: Vec<&str> = composed.iter().map(|it| it.ids.item_id.as_str()).collect();
        assert_eq!(ids, vec![
            "action-list-item-0",
            "action-list-item-1",
            "action-list-item-2"
        ]);
    }

    #[test]
    fn test_render_markup() {
        let markup = try_render(&config(), OutputFormat::Markup).unwrap();
        assert_eq!(markup.matches("<li ").count(), 3);
        assert!(markup.contains("role=\"menuitemradio\""));
        assert!(markup.contains("aria-disabled=\"true\""));
    }

    #[test]
    fn test_render_json() {
        let json = try_render(&config(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["ids"]["label_id"], "action-list-item-1--label");
        assert_eq!(items[2]["scope"]["inactive"], true);
    }

    #[test_case("copy", InputEvent::Click, EventPropagation::ConsumedRender, 1, 1)]
    #[test_case("copy", InputEvent::enter(), EventPropagation::ConsumedRender, 1, 1)]
    #[test_case("copy", InputEvent::Keyboard(r3bl_action_list::Key::Character('x')),
                EventPropagation::Propagate, 0, 0)]
    #[test_case("paste", InputEvent::space(), EventPropagation::Propagate, 0, 0)]
    #[test_case("share", InputEvent::Click, EventPropagation::Propagate, 0, 0)]
    fn test_select(
        key: &str,
        event: InputEvent,
        propagation: EventPropagation,
        handler_calls: usize,
        after_select_calls: usize,
    ) {
        let report = try_select(&config(), key, event).unwrap();
        assert_eq!(report, SelectReport {
            key: key.to_string(),
            event,
            propagation,
            handler_calls,
            after_select_calls,
        });
    }

    #[test]
    fn test_select_without_container_is_consumed() {
        let config = ListConfig::try_from_str(
            r#"{"items": [{"key": "a", "children": [{"type": "text", "value": "A"}]}]}"#,
        )
        .unwrap();
        let report = try_select(&config, "a", InputEvent::Click).unwrap();
        assert_eq!(report.propagation, EventPropagation::Consumed);
        assert_eq!(report.after_select_calls, 0);
    }

    #[test]
    fn test_select_unknown_key() {
        let error = try_select(&config(), "cut", InputEvent::Click).unwrap_err();
        let error = error.downcast_ref::<ActionListError>().unwrap();
        assert!(matches!(error, ActionListError::UnknownItem { key } if key == "cut"));
    }

    #[test]
    fn test_report_display() {
        let report = try_select(&config(), "copy", InputEvent::Click).unwrap();
        assert_eq!(
            report.to_string(),
            "copy <- click: consumed, container closed (handler calls: 1, after select calls: 1)"
        );
    }
}
