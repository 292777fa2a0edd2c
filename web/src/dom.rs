use tilecycle_core::{AnimatorError, CellIndex, Direction, TileBoard};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, NodeList};

/// Tile containers of the intro puzzle, in row-major document order.
pub const CONTAINER_SELECTOR: &str = ".intro__tile__container";

/// [`TileBoard`] over live DOM elements. Each container holds at most one tile element.
#[derive(Clone, Debug)]
pub struct DomBoard {
    containers: Vec<Element>,
}

impl DomBoard {
    /// Binds to every [`CONTAINER_SELECTOR`] match in the page.
    pub fn from_document() -> anyhow::Result<Self> {
        let list = gloo::utils::document()
            .query_selector_all(CONTAINER_SELECTOR)
            .map_err(|err| anyhow::anyhow!("query {CONTAINER_SELECTOR:?} failed: {err:?}"))?;
        Ok(Self::from_node_list(&list))
    }

    /// Binds to the [`CONTAINER_SELECTOR`] matches below `root`.
    pub fn from_root(root: &Element) -> anyhow::Result<Self> {
        let list = root
            .query_selector_all(CONTAINER_SELECTOR)
            .map_err(|err| anyhow::anyhow!("query {CONTAINER_SELECTOR:?} failed: {err:?}"))?;
        Ok(Self::from_node_list(&list))
    }

    pub fn from_node_list(list: &NodeList) -> Self {
        let containers = (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        Self { containers }
    }

    pub fn container(&self, index: CellIndex) -> Option<&Element> {
        self.containers.get(usize::from(index))
    }

    fn require(&self, index: CellIndex) -> tilecycle_core::Result<&Element> {
        self.container(index)
            .ok_or(AnimatorError::MissingContainers {
                expected: index.saturating_add(1),
                found: self.containers.len(),
            })
    }
}

fn mutation_failed(index: CellIndex) -> impl FnOnce(JsValue) -> AnimatorError {
    move |err| {
        log::error!("Moving tile out of container {} failed: {:?}", index, err);
        AnimatorError::DomMutation { index }
    }
}

impl TileBoard for DomBoard {
    fn container_count(&self) -> usize {
        self.containers.len()
    }

    fn is_empty(&self, index: CellIndex) -> Option<bool> {
        self.container(index)
            .map(|container| container.first_element_child().is_none())
    }

    fn slide(
        &mut self,
        from: CellIndex,
        to: CellIndex,
        direction: Direction,
    ) -> tilecycle_core::Result<()> {
        let source = self.require(from)?;
        let target = self.require(to)?;
        let tile = source
            .first_element_child()
            .ok_or(AnimatorError::EmptyContainer { index: from })?;
        if target.first_element_child().is_some() {
            return Err(AnimatorError::OccupiedContainer { index: to });
        }

        target.append_child(&tile).map_err(mutation_failed(from))?;

        let classes = tile.class_list();
        for class in Direction::all_slide_classes() {
            classes.remove_1(class).map_err(mutation_failed(from))?;
        }
        classes
            .add_1(direction.slide_class())
            .map_err(mutation_failed(from))?;
        Ok(())
    }
}
