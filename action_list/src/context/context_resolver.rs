// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result};

use super::{AfterSelectHook, AmbientScopes, ContainerKind, ListVariant, SelectionAttribute,
            SelectionVariant};
use crate::AriaRole;

/// Effective ambient configuration for one composition pass. It is rebuilt for every
/// pass and never outlives it.
#[derive(Clone, Default)]
pub struct ResolvedContext {
    pub list_variant: ListVariant,
    pub list_role: Option<AriaRole>,
    pub show_dividers: bool,
    pub selection_variant: Option<SelectionVariant>,
    pub container_kind: Option<ContainerKind>,
    pub after_select: Option<AfterSelectHook>,
    pub selection_attribute: Option<SelectionAttribute>,
}

impl Debug for ResolvedContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ResolvedContext")
            .field("list_variant", &self.list_variant)
            .field("list_role", &self.list_role)
            .field("show_dividers", &self.show_dividers)
            .field("selection_variant", &self.selection_variant)
            .field("container_kind", &self.container_kind)
            .field("after_select", &self.after_select.as_ref().map(|_| "<function>"))
            .field("selection_attribute", &self.selection_attribute)
            .finish()
    }
}

/// Reads the three scopes.
///
/// - The group's selection variant wins over the list's when the group sets one.
/// - Container kind, post-select hook and selection attribute come only from the
///   container scope.
/// - List role, list variant and dividers come only from the list scope.
///
/// A missing scope contributes defaults. This never fails.
#[must_use]
pub fn resolve_context(scopes: &AmbientScopes<'_>) -> ResolvedContext {
    let list = scopes.list.cloned().unwrap_or_default();
    let group_selection_variant = scopes.group.and_then(|group| group.selection_variant);

    let (container_kind, after_select, selection_attribute) = match scopes.container {
        Some(container) => (
            container.kind,
            container.after_select.clone(),
            container.selection_attribute,
        ),
        None => (None, None, None),
    };

    ResolvedContext {
        list_variant: list.variant,
        list_role: list.role,
        show_dividers: list.show_dividers,
        selection_variant: group_selection_variant.or(list.selection_variant),
        container_kind,
        after_select,
        selection_attribute,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContainerScope, GroupScope, ListScope};
    use test_case::test_case;

    #[test]
    fn test_no_scopes_yields_defaults() {
        let context = resolve_context(&AmbientScopes::default());
        assert_eq!(context.list_variant, ListVariant::Inset);
        assert_eq!(context.list_role, None);
        assert!(!context.show_dividers);
        assert_eq!(context.selection_variant, None);
        assert_eq!(context.container_kind, None);
        assert!(context.after_select.is_none());
        assert_eq!(context.selection_attribute, None);
    }

    #[test_case(None, None, None)]
    #[test_case(Some(SelectionVariant::Single), None, Some(SelectionVariant::Single))]
    #[test_case(None, Some(SelectionVariant::Multiple), Some(SelectionVariant::Multiple))]
    #[test_case(
        Some(SelectionVariant::Single),
        Some(SelectionVariant::Multiple),
        Some(SelectionVariant::Multiple)
    )]
    fn test_group_overrides_list_selection_variant(
        list: Option<SelectionVariant>,
        group: Option<SelectionVariant>,
        expected: Option<SelectionVariant>,
    ) {
        let list = ListScope {
            selection_variant: list,
            ..Default::default()
        };
        let group = GroupScope::new(group);
        let scopes = AmbientScopes::default().with_list(&list).with_group(&group);

        assert_eq!(resolve_context(&scopes).selection_variant, expected);
    }

    #[test]
    fn test_container_fields_come_from_container_only() {
        let list = ListScope::default()
            .with_role(AriaRole::ListBox)
            .with_variant(ListVariant::Full)
            .with_dividers(true);
        let container = ContainerScope::new(ContainerKind::SelectPanel)
            .with_selection_attribute(SelectionAttribute::AriaSelected)
            .with_after_select(|| {});
        let scopes = AmbientScopes::default()
            .with_list(&list)
            .with_container(&container);

        let context = resolve_context(&scopes);

        assert_eq!(context.list_role, Some(AriaRole::ListBox));
        assert_eq!(context.list_variant, ListVariant::Full);
        assert!(context.show_dividers);
        assert_eq!(context.container_kind, Some(ContainerKind::SelectPanel));
        assert_eq!(context.selection_attribute, Some(SelectionAttribute::AriaSelected));
        assert!(context.after_select.is_some());
    }

    #[test]
    fn test_container_without_kind() {
        let container = ContainerScope::default().with_after_select(|| {});
        let scopes = AmbientScopes::default().with_container(&container);
        let context = resolve_context(&scopes);
        assert_eq!(context.container_kind, None);
        assert!(context.after_select.is_some());
    }
}
