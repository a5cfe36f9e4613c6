#![forbid(unsafe_code)]

//! Drop target resolution.
//!
//! Starting at the widget under the pointer, walk up the parent chain and
//! ask each widget's listeners, in registration order, whether they accept
//! the drag. The first answer wins: a child's listeners shadow its
//! parent's, and within one widget the earliest registration shadows the
//! rest. Default listeners are consulted only when no ancestor answers.

use crate::registry::TargetRegistry;
use crate::target::{DropQuery, DropTarget, ListenerRef};
use crate::toolkit::WidgetToolkit;

/// Find the drop target for `query` starting at `widget`.
///
/// `widget` may be `None` (nothing under the pointer); resolution then goes
/// straight to the default listeners. Listeners always receive the starting
/// widget, whichever ancestor they are registered on.
pub fn resolve<T: WidgetToolkit + ?Sized>(
    registry: &TargetRegistry<T::Widget>,
    toolkit: &T,
    widget: Option<T::Widget>,
    query: &DropQuery<'_>,
) -> Option<Box<dyn DropTarget>> {
    let mut current = widget;
    let mut depth = 0usize;
    while let Some(ancestor) = current {
        if let Some((index, target)) = first_match(registry.targets_for(ancestor), widget, query) {
            tracing::trace!(
                drag_event = "target_resolved",
                ?widget,
                ?ancestor,
                depth,
                index,
                cursor = target.cursor().as_str(),
                "drop target resolved"
            );
            return Some(target);
        }
        current = toolkit.parent(ancestor);
        depth += 1;
    }

    let (index, target) = first_match(registry.default_targets(), widget, query)?;
    tracing::trace!(
        drag_event = "default_target_resolved",
        ?widget,
        index,
        cursor = target.cursor().as_str(),
        "default drop target resolved"
    );
    Some(target)
}

fn first_match<W: Copy>(
    listeners: &[ListenerRef<W>],
    widget: Option<W>,
    query: &DropQuery<'_>,
) -> Option<(usize, Box<dyn DropTarget>)> {
    listeners
        .iter()
        .enumerate()
        .find_map(|(i, l)| l.try_accept(widget, query).map(|t| (i, t)))
}
