use crate::disc::element_state::ElementState;

/// Mesh element as seen by the discretization: an identifier and its state arrays.
/// Geometry and connectivity live with the mesh owner.
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub id: usize,
    pub state: ElementState,
}
impl Element {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: ElementState::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub elements: Vec<Element>,
}
impl Mesh {
    /// `elem_num` elements with empty state, numbered from 0.
    pub fn new(elem_num: usize) -> Self {
        Self {
            elements: (0..elem_num).map(Element::new).collect(),
        }
    }
    pub fn elem_num(&self) -> usize {
        self.elements.len()
    }
}
