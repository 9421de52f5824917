/// Snapshot of the widget state the refine control surfaces to the user,
/// rebuilt on every data render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub enable_refine_control: bool,
    pub enable_clear_map_refinement: bool,
    pub is_refine_on_map_move: bool,
    pub is_refined_by_map: bool,
    pub has_map_moved_since_last_refine: bool,
}

/// The thin presentational control (toggle / "search this area" buttons).
///
/// Its visual rendering lives outside this crate; the widget only hands it
/// a fresh [`ControlState`] once per data pass. User actions flow back
/// through [`crate::GeoSearchWidget::refine_with_current_bounds`],
/// [`crate::GeoSearchWidget::clear_map_refinement`] and
/// [`crate::GeoSearchWidget::toggle_refine_on_map_move`].
pub trait RefineControl {
    fn render(&mut self, state: &ControlState);
}

/// Control that renders nothing, for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopControl;

impl RefineControl for NoopControl {
    fn render(&mut self, _state: &ControlState) {}
}
