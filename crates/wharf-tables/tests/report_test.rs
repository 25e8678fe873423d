
use fixtures::delivery_notes;
use futures::executor::block_on;
use rstest::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use wharf_tables::whitelist::{DOCUMENT_STATUSES, TRUCK_TYPES};
use wharf_tables::{
	ActionKind, Callback, Cell, ColumnSet, Placement, ReportLayout, RowActions, StatusToggle,
	TableError, action_column, date_column, enum_column, money_column, status_column, text_column,
};

type Log = Rc<RefCell<Vec<String>>>;

fn delivery_note_columns(log: &Log) -> ColumnSet<Value> {
	let setter_log = Rc::clone(log);
	let refresh_log = Rc::clone(log);
	let print_log = Rc::clone(log);

	let toggle = StatusToggle::new(
		"code",
		move |code: String, active: bool| {
			setter_log.borrow_mut().push(format!("set {} {}", code, active));
			async move {
				if code == "DN-0002" {
					anyhow::bail!("document already printed");
				}
				Ok(())
			}
		},
		Callback::new(move |()| refresh_log.borrow_mut().push("refresh".to_string())),
	);

	let mut columns = ColumnSet::new()
		.with(text_column("code", "Code"))
		.with(enum_column("status", "Status", DOCUMENT_STATUSES))
		.with(enum_column("jobOrder.inquiryDetail.truckType", "Truck", TRUCK_TYPES))
		.with(date_column("jobOrder.inquiryDetail.etd", "ETD").disabled_on_create(true))
		.with(date_column("jobOrder.inquiryDetail.eta", "ETA"))
		.with(money_column("freight", "Freight"))
		.with(status_column("isActive", "Active", toggle));

	columns
		.place(
			action_column(
				"Action",
				RowActions::new().on_print(move |row: &Value| {
					print_log
						.borrow_mut()
						.push(format!("print {}", row["code"].as_str().unwrap_or_default()))
				}),
			),
			Placement::After("isActive".to_string()),
		)
		.unwrap();
	columns
}

#[rstest]
fn test_render_delivery_notes(delivery_notes: Vec<Value>) {
	let log = Log::default();
	let layout = ReportLayout::new("Delivery Notes", delivery_note_columns(&log)).rows(delivery_notes);

	assert_eq!(
		layout.headers(),
		vec!["Code", "Status", "Truck", "ETD", "ETA", "Freight", "Active", "Action"]
	);

	let grid = layout.render_rows();
	assert_eq!(
		grid[0],
		vec![
			Cell::text("DN-0001"),
			Cell::text("Confirmed"),
			Cell::text("Fuso"),
			Cell::text("01-03-2024"),
			Cell::text("04-03-2024"),
			Cell::text("Rp 1.250.000"),
			Cell::Switch { checked: true },
			Cell::Actions(vec![ActionKind::Print]),
		]
	);

	// null relation: every nested column is empty
	assert_eq!(grid[1][2], Cell::text(""));
	assert_eq!(grid[1][3], Cell::text(""));
	assert_eq!(grid[1][4], Cell::text(""));
	assert_eq!(grid[1][5], Cell::text("Rp 875.000"));
	assert_eq!(grid[1][6], Cell::Switch { checked: false });

	// out-of-whitelist values render unchanged but flagged
	assert_eq!(grid[2][1], Cell::flagged("Archived"));
	assert_eq!(grid[2][2], Cell::flagged("Pickup"));
	assert_eq!(grid[2][3], Cell::text("01-03-2024"));
	assert_eq!(grid[2][5], Cell::text(""));
	assert_eq!(grid[2][6], Cell::Switch { checked: true });
}

#[rstest]
fn test_toggle_success_refreshes(delivery_notes: Vec<Value>) {
	let log = Log::default();
	let layout = ReportLayout::new("Delivery Notes", delivery_note_columns(&log)).rows(delivery_notes);

	block_on(layout.toggle("isActive", 0, false)).unwrap();

	assert_eq!(*log.borrow(), vec!["set DN-0001 false", "refresh"]);
	assert_eq!(layout.data()[0]["isActive"], json!(true));
}

#[rstest]
fn test_toggle_failure_does_not_refresh(delivery_notes: Vec<Value>) {
	let log = Log::default();
	let layout = ReportLayout::new("Delivery Notes", delivery_note_columns(&log)).rows(delivery_notes);

	let err = block_on(layout.toggle("isActive", 1, true)).unwrap_err();

	assert!(matches!(err, TableError::StatusUpdate { .. }));
	assert_eq!(*log.borrow(), vec!["set DN-0002 true"]);
}

#[rstest]
fn test_only_supplied_actions_are_invocable(delivery_notes: Vec<Value>) {
	let log = Log::default();
	let layout = ReportLayout::new("Delivery Notes", delivery_note_columns(&log)).rows(delivery_notes);

	layout.invoke_action("actions", 2, ActionKind::Print).unwrap();
	assert_eq!(*log.borrow(), vec!["print DN-0003"]);

	for kind in [ActionKind::View, ActionKind::Edit] {
		let err = layout.invoke_action("actions", 0, kind).unwrap_err();
		assert!(matches!(err, TableError::ActionNotAvailable { action, .. } if action == kind));
	}
	assert_eq!(log.borrow().len(), 1);
}

#[rstest]
fn test_date_column_disabled_on_create() {
	let log = Log::default();
	let columns = delivery_note_columns(&log);
	let etd = columns.get("jobOrder.inquiryDetail.etd").unwrap();
	let eta = columns.get("jobOrder.inquiryDetail.eta").unwrap();

	assert!(etd.is_disabled(wharf_tables::FormMode::Create));
	assert!(!etd.is_disabled(wharf_tables::FormMode::Edit));
	assert!(!eta.is_disabled(wharf_tables::FormMode::Create));
}
