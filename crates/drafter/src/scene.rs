//! The scene model: an ordered list of elements plus the current selection.
//!
//! List order is z-order: the first element is drawn first (bottom). Ids are
//! issued from a counter that never goes backwards, so an id is never reused
//! within the lifetime of a scene, including across [`Scene::clear`] and
//! [`Scene::import_json`]. Once the counter is exhausted, new ids take the
//! lowest `element-<n>` not present in the scene.

use std::collections::HashSet;

use log::{debug, info, warn};

use drafter_core::{
    color::Color,
    element::{DEFAULT_COLOR, Element, ElementId, ElementKind, ElementPatch},
    geometry::Point,
};

use crate::{Error, document::SceneDocument};

/// Ordered element list with selection and id allocation.
#[derive(Debug, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    /// Sequence number of the last issued id.
    last_sequence: u64,
    default_color: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

impl Scene {
    /// Creates an empty scene whose new elements take `default_color`.
    pub fn new(default_color: Color) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            last_sequence: 0,
            default_color,
        }
    }

    /// Appends a new element of `kind` centered on `position`.
    pub fn create(&mut self, kind: ElementKind, position: Point) -> &Element {
        let id = self.next_id();
        debug!(id:% = id, kind:% = kind; "Creating element");

        let element = Element::new(id, kind, position).with_color(self.default_color);
        self.elements.push(element);
        &self.elements[self.elements.len() - 1]
    }

    /// Like [`Scene::create`], parsing a toolbar payload. Unknown tags create
    /// a [`ElementKind::Generic`] element.
    pub fn create_from_tag(&mut self, tag: &str, position: Point) -> &Element {
        self.create(ElementKind::from_tag(tag), position)
    }

    /// Selects the element with `id`. An unknown id clears the selection.
    pub fn select(&mut self, id: &ElementId) -> Option<&Element> {
        let index = self.index_of(id);
        self.selected = index.map(|_| id.clone());
        if index.is_none() {
            debug!(id:% = id; "Select of unknown element");
        }
        index.map(|i| &self.elements[i])
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Applies `patch` to the element with `id`.
    ///
    /// Returns the updated element, or `None` if no element has that id.
    pub fn update(&mut self, id: &ElementId, patch: &ElementPatch) -> Option<&Element> {
        let Some(index) = self.index_of(id) else {
            debug!(id:% = id; "Update of unknown element");
            return None;
        };

        let element = &mut self.elements[index];
        element.apply(patch);
        debug!(id:% = id, patch:? = patch; "Element updated");
        Some(element)
    }

    /// Moves the element with `id` so that its center is at `position`.
    pub fn move_to(&mut self, id: &ElementId, position: Point) -> Option<&Element> {
        let Some(index) = self.index_of(id) else {
            debug!(id:% = id; "Move of unknown element");
            return None;
        };

        let element = &mut self.elements[index];
        element.set_position(position);
        Some(element)
    }

    /// Removes the element with `id`, clearing the selection if it pointed
    /// at that element.
    pub fn delete(&mut self, id: &ElementId) -> Option<Element> {
        let Some(index) = self.index_of(id) else {
            debug!(id:% = id; "Delete of unknown element");
            return None;
        };

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!(id:% = id; "Element deleted");
        Some(self.elements.remove(index))
    }

    /// Removes every element and the selection. The id counter is kept.
    pub fn clear(&mut self) {
        debug!(count = self.elements.len(); "Clearing scene");
        self.elements.clear();
        self.selected = None;
    }

    /// Returns the persisted form of the scene.
    pub fn serialize(&self) -> SceneDocument {
        SceneDocument::new(self.elements.clone())
    }

    /// Replaces the element list with the document's and clears the selection.
    ///
    /// The id counter is advanced past every imported `element-<n>` id. An
    /// element whose id repeats an earlier one is given a fresh id.
    pub fn deserialize(&mut self, document: SceneDocument) {
        self.elements = document.into_elements();
        self.selected = None;

        let imported_max = self
            .elements
            .iter()
            .filter_map(|element| element.id().sequence())
            .max()
            .unwrap_or(0);
        self.last_sequence = self.last_sequence.max(imported_max);

        let mut seen = HashSet::new();
        let duplicates: Vec<usize> = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !seen.insert(element.id().clone()))
            .map(|(index, _)| index)
            .collect();

        for index in duplicates {
            let id = self.next_id();
            warn!(
                duplicate:% = self.elements[index].id(),
                id:% = id;
                "Renaming element with duplicate id"
            );
            self.elements[index].set_id(id);
        }
    }

    /// Clears the scene, then loads the document in `json`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Import`] for malformed input. The scene is left
    /// empty in that case.
    pub fn import_json(&mut self, json: &str) -> Result<(), Error> {
        self.clear();
        let document = SceneDocument::from_json(json)?;
        self.deserialize(document);
        info!(count = self.elements.len(); "Scene imported");
        Ok(())
    }

    /// Serializes the scene as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Import`] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        self.serialize().to_json_pretty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// Returns the selected element.
    pub fn selected(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn next_id(&mut self) -> ElementId {
        if let Some(next) = self.last_sequence.checked_add(1) {
            self.last_sequence = next;
            return ElementId::from_sequence(next);
        }

        // Counter exhausted; at most `len` sequences are taken so one of
        // 1..=len+1 is free
        let taken: HashSet<&ElementId> = self.elements.iter().map(Element::id).collect();
        let mut candidate = 1;
        while taken.contains(&ElementId::from_sequence(candidate)) {
            candidate += 1;
        }
        ElementId::from_sequence(candidate)
    }

    fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}
