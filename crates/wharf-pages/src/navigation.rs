//! Navigation state and entity routes
//!
//! The selected menu entry is derived from the current route instead of
//! being set by hand from every page. [`NavigationState`] is owned by the
//! application shell and handed to pages; whichever page activates last
//! determines the selection.

use std::fmt;
use wharf_tables::{Accessor, ActionKind, Callback, RowActions, is_blank};

use crate::reactive::{Signal, Subscription};

const ACTION_SEGMENTS: &[&str] = &["create", "edit", "view", "print"];

/// Menu key of `route`: its path segments up to the first action segment
///
/// ```
/// use wharf_pages::navigation::menu_key;
///
/// assert_eq!(menu_key("/master/customers"), "master/customers");
/// assert_eq!(menu_key("/master/customers/edit/C001"), "master/customers");
/// assert_eq!(menu_key("/documents/delivery-notes/print/DN-1?copy=2"), "documents/delivery-notes");
/// ```
pub fn menu_key(route: &str) -> String {
	let path = route.split(['?', '#']).next().unwrap_or_default();
	path.split('/')
		.filter(|segment| !segment.is_empty())
		.take_while(|segment| !ACTION_SEGMENTS.contains(segment))
		.collect::<Vec<_>>()
		.join("/")
}

/// Current route and menu selection of the application shell
#[derive(Clone, Default)]
pub struct NavigationState {
	route: Signal<Option<String>>,
	menu: Signal<Option<String>>,
}

impl NavigationState {
	/// Nothing selected
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `route` as current and selects its menu entry
	///
	/// Pages call this when they activate; the last call wins.
	pub fn activate(&self, route: impl Into<String>) {
		let route = route.into();
		let key = menu_key(&route);
		tracing::debug!(route = %route, menu = %key, "page activated");
		self.route.set(Some(route));
		if self.menu.with(|current| current.as_deref() != Some(key.as_str())) {
			self.menu.set(Some(key));
		}
	}

	/// The current route
	pub fn route(&self) -> Option<String> {
		self.route.get()
	}

	/// The selected menu key
	pub fn menu(&self) -> Option<String> {
		self.menu.get()
	}

	/// Whether `key` is the selected menu entry
	pub fn is_selected(&self, key: &str) -> bool {
		self.menu.with(|menu| menu.as_deref() == Some(key))
	}

	/// Calls `f` whenever the menu selection changes
	pub fn on_menu_change<F>(&self, f: F) -> Subscription
	where
		F: Fn() + 'static,
	{
		self.menu.subscribe(f)
	}
}

impl fmt::Debug for NavigationState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationState")
			.field("route", &self.route())
			.field("menu", &self.menu())
			.finish()
	}
}

/// List, create, edit, view and print routes of one entity
///
/// ```
/// use wharf_pages::EntityRoutes;
///
/// let customers = EntityRoutes::new("master/customers/");
/// assert_eq!(customers.list(), "/master/customers");
/// assert_eq!(customers.create(), "/master/customers/create");
/// assert_eq!(customers.edit("C001"), "/master/customers/edit/C001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRoutes {
	base: String,
}

impl EntityRoutes {
	/// Routes below `base`; slashes around it are normalised
	pub fn new(base: impl AsRef<str>) -> Self {
		Self {
			base: format!("/{}", base.as_ref().trim_matches('/')),
		}
	}

	/// List page
	pub fn list(&self) -> String {
		self.base.clone()
	}

	/// Save page for a new record
	pub fn create(&self) -> String {
		format!("{}/create", self.base)
	}

	/// Save page for an existing record
	pub fn edit(&self, key: &str) -> String {
		self.for_action(ActionKind::Edit, key)
	}

	/// Read-only detail page
	pub fn view(&self, key: &str) -> String {
		self.for_action(ActionKind::View, key)
	}

	/// Print page
	pub fn print(&self, key: &str) -> String {
		self.for_action(ActionKind::Print, key)
	}

	/// Route of row action `kind` for the record `key`
	pub fn for_action(&self, kind: ActionKind, key: &str) -> String {
		format!("{}/{}/{}", self.base, kind, key)
	}

	/// Row actions navigating to this entity's pages
	///
	/// Only the `kinds` given get a button. The record key is read through
	/// `key`; rows without one navigate nowhere.
	pub fn row_actions<R: 'static>(
		&self,
		key: impl Into<Accessor<R>>,
		kinds: &[ActionKind],
		navigate: Callback<String>,
	) -> RowActions<R> {
		let key = key.into();
		kinds.iter().fold(RowActions::new(), |actions, &kind| {
			let routes = self.clone();
			let key = key.clone();
			let navigate = navigate.clone();
			let go = move |row: &R| match key.get(row) {
				Some(value) if !is_blank(Some(&value)) => {
					let key = match value {
						serde_json::Value::String(s) => s,
						other => other.to_string(),
					};
					navigate.call(routes.for_action(kind, &key));
				}
				_ => tracing::warn!(action = %kind, path = key.key(), "row has no key to navigate to"),
			};
			match kind {
				ActionKind::View => actions.on_view(go),
				ActionKind::Edit => actions.on_edit(go),
				ActionKind::Print => actions.on_print(go),
			}
		})
	}
}
