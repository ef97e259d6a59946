//! Click handling for the changelist body.

use rowdom::{closest, find_element, Element, Event};

use crate::classes::{COLLAPSED, TOGGLE};
use crate::collapser::TreeCollapser;
use crate::error::TreeError;
use crate::node::toggle_pk;

impl TreeCollapser {
    /// Delegated click listener for the table body.
    ///
    /// Looks for a toggle at or above the event target, inside the body. If
    /// there is none the event is left untouched and `Ok(false)` is returned,
    /// so links in the row keep working. Otherwise the default action is
    /// prevented and the toggle's node is flipped.
    pub fn handle_click(&self, root: &mut Element, event: &mut Event) -> Result<bool, TreeError> {
        if !event.is_primary_click() {
            return Ok(false);
        }

        let (pk, currently_collapsed) = {
            let Some(container) = find_element(root, &self.container) else {
                log::debug!("Container {} not in document, ignoring click", self.container);
                return Ok(false);
            };
            let Some(toggle) = closest(container, &event.target, |el| el.has_class(TOGGLE)) else {
                return Ok(false);
            };
            (toggle_pk(toggle), toggle.has_class(COLLAPSED))
        };

        event.prevent_default();

        let pk = pk?;
        log::debug!("Toggle clicked for tree node {pk}");
        self.set_collapsed(root, pk, !currently_collapsed)?;
        Ok(true)
    }
}
