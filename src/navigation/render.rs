use super::route::Routes;
use super::state::NavigationState;

/// Maps routes of one scope to renderable units.
///
/// Implementations should `match` exhaustively on each route enum without a
/// wildcard arm, so adding a variant fails to compile until it has a view.
pub trait RenderRoute<R: Routes> {
    type View;

    fn render_route(&self, screen: &R::Screen) -> Self::View;

    fn render_sheet(&self, sheet: &R::Sheet) -> Self::View;

    fn render_cover(&self, cover: &R::Cover) -> Self::View;

    /// Views for the root and every pushed screen, bottom first.
    fn render_stack(&self, state: &NavigationState<R>) -> Vec<Self::View> {
        std::iter::once(state.root())
            .chain(state.path())
            .map(|screen| self.render_route(screen))
            .collect()
    }
}
