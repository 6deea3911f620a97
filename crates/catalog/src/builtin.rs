//! The builtin Meridian suite catalog.
//!
//! Single source of truth for every grantable capability. Changing this file
//! is a deployment: nothing mutates the catalog at runtime, and subscription
//! plans reference these codes (wildcards resolve against whatever is
//! defined here at the moment of resolution).

use crate::types::{Application, Catalog, Module, Permission};

/// Application code of the accounting product area.
///
/// The accounting application is the target of the legacy compatibility
/// maps, so its code is referenced from outside this crate.
pub const ACCOUNTING_APP: &str = "accounting";

/// Build the full suite catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        accounting(),
        crm(),
        inventory(),
        analytics(),
        payroll(),
    ])
}

fn perm(code: &str, name: &str, description: &str) -> Permission {
    Permission {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Standard create/read/read_all/update/delete block for a record type.
///
/// `singular`/`plural` are display words ("Invoice", "Invoices"); passed
/// separately because not every record pluralizes with a trailing `s`.
fn crud(singular: &str, plural: &str) -> Vec<Permission> {
    let lower_singular = singular.to_lowercase();
    let lower_plural = plural.to_lowercase();
    vec![
        perm(
            "create",
            &format!("Create {singular}"),
            &format!("Create a new {lower_singular}"),
        ),
        perm(
            "read",
            &format!("View {plural}"),
            &format!("View {lower_plural} the user created or is assigned to"),
        ),
        perm(
            "read_all",
            &format!("View All {plural}"),
            &format!("View every {lower_singular} in the organization"),
        ),
        perm(
            "update",
            &format!("Edit {singular}"),
            &format!("Modify an existing {lower_singular}"),
        ),
        perm(
            "delete",
            &format!("Delete {singular}"),
            &format!("Remove a {lower_singular}"),
        ),
    ]
}

fn module(
    module_code: &str,
    module_name: &str,
    description: &str,
    is_core: bool,
    permissions: Vec<Permission>,
) -> Module {
    Module {
        module_code: module_code.to_string(),
        module_name: module_name.to_string(),
        description: description.to_string(),
        is_core,
        permissions,
    }
}

fn accounting() -> Application {
    let mut invoices = crud("Invoice", "Invoices");
    invoices.push(perm("send", "Send Invoice", "Email an invoice to the customer"));
    invoices.push(perm("void", "Void Invoice", "Void an issued invoice"));

    let mut estimates = crud("Estimate", "Estimates");
    estimates.push(perm("send", "Send Estimate", "Email an estimate to the customer"));
    estimates.push(perm(
        "convert",
        "Convert Estimate",
        "Convert an accepted estimate into an invoice",
    ));

    let mut credit_notes = crud("Credit Note", "Credit Notes");
    credit_notes.push(perm(
        "apply",
        "Apply Credit Note",
        "Apply a credit note against an open invoice",
    ));

    let mut sales_orders = crud("Sales Order", "Sales Orders");
    sales_orders.push(perm("confirm", "Confirm Sales Order", "Confirm a draft sales order"));

    let mut bills = crud("Bill", "Bills");
    bills.push(perm("approve", "Approve Bill", "Approve a vendor bill for payment"));

    let mut purchase_orders = crud("Purchase Order", "Purchase Orders");
    purchase_orders.push(perm("issue", "Issue Purchase Order", "Send a purchase order to the vendor"));

    let mut expense_reports = crud("Expense Report", "Expense Reports");
    expense_reports.push(perm(
        "approve",
        "Approve Expense Report",
        "Approve a submitted expense report for reimbursement",
    ));

    let mut vendor_credits = crud("Vendor Credit", "Vendor Credits");
    vendor_credits.push(perm(
        "apply",
        "Apply Vendor Credit",
        "Apply a vendor credit against an open bill",
    ));

    Application {
        app_code: ACCOUNTING_APP.to_string(),
        app_name: "Accounting".to_string(),
        description: "Invoicing, payables, banking and bookkeeping".to_string(),
        icon: "ledger".to_string(),
        base_url: "/accounting".to_string(),
        version: "2.4.0".to_string(),
        is_core: true,
        sort_order: 1,
        modules: vec![
            module(
                "invoices",
                "Invoices",
                "Customer invoices and receivables",
                true,
                invoices,
            ),
            module(
                "estimates",
                "Estimates",
                "Quotes sent to customers before a sale",
                true,
                estimates,
            ),
            module(
                "credit_notes",
                "Credit Notes",
                "Credits issued against customer invoices",
                false,
                credit_notes,
            ),
            module(
                "customers",
                "Customers",
                "Customer records and contact details",
                true,
                crud("Customer", "Customers"),
            ),
            module(
                "sales_orders",
                "Sales Orders",
                "Confirmed customer orders pending invoicing",
                false,
                sales_orders,
            ),
            module("bills", "Bills", "Vendor bills and payables", true, bills),
            module(
                "vendors",
                "Vendors",
                "Vendor records and payment details",
                true,
                crud("Vendor", "Vendors"),
            ),
            module(
                "purchase_orders",
                "Purchase Orders",
                "Orders issued to vendors",
                false,
                purchase_orders,
            ),
            module(
                "expense_reports",
                "Expense Reports",
                "Employee expense claims",
                false,
                expense_reports,
            ),
            module(
                "vendor_credits",
                "Vendor Credits",
                "Credits received from vendors",
                false,
                vendor_credits,
            ),
            module(
                "banking",
                "Banking",
                "Bank feeds, statements and reconciliation",
                true,
                vec![
                    perm("read", "View Banking", "View bank accounts and imported transactions"),
                    perm(
                        "reconcile",
                        "Reconcile Transactions",
                        "Match imported transactions against ledger entries",
                    ),
                    perm(
                        "import_statements",
                        "Import Statements",
                        "Import bank statements from file or feed",
                    ),
                    perm(
                        "manage_accounts",
                        "Manage Bank Accounts",
                        "Add, edit and deactivate bank accounts",
                    ),
                ],
            ),
            module(
                "general_ledger",
                "General Ledger",
                "Journals and the double-entry ledger",
                true,
                vec![
                    perm("read", "View Ledger", "View journals and account balances"),
                    perm("post", "Post Journal Entries", "Post manual journal entries"),
                    perm(
                        "close_period",
                        "Close Accounting Period",
                        "Close a period against further posting",
                    ),
                    perm("export", "Export Ledger", "Export ledger data for external audit"),
                ],
            ),
            module(
                "chart_of_accounts",
                "Chart of Accounts",
                "The account structure underlying the ledger",
                true,
                vec![
                    perm("create", "Create Account", "Add an account to the chart"),
                    perm("read", "View Chart of Accounts", "View the account hierarchy"),
                    perm("update", "Edit Account", "Rename or recategorize an account"),
                    perm("archive", "Archive Account", "Archive an unused account"),
                ],
            ),
            module(
                "multi_entity",
                "Multi-Entity",
                "Consolidated books across legal entities",
                false,
                vec![
                    perm("read", "View Entities", "View linked legal entities"),
                    perm("manage", "Manage Entities", "Link and configure legal entities"),
                    perm(
                        "consolidate",
                        "Run Consolidation",
                        "Produce consolidated statements across entities",
                    ),
                ],
            ),
        ],
    }
}

fn crm() -> Application {
    let mut leads = crud("Lead", "Leads");
    leads.push(perm("convert", "Convert Lead", "Convert a qualified lead into a contact and deal"));

    let mut deals = crud("Deal", "Deals");
    deals.push(perm("advance", "Advance Deal", "Move a deal to the next pipeline stage"));

    let mut activities = crud("Activity", "Activities");
    activities.push(perm("complete", "Complete Activity", "Mark a scheduled activity as done"));

    Application {
        app_code: "crm".to_string(),
        app_name: "CRM".to_string(),
        description: "Leads, contacts and the sales pipeline".to_string(),
        icon: "handshake".to_string(),
        base_url: "/crm".to_string(),
        version: "1.9.2".to_string(),
        is_core: true,
        sort_order: 2,
        modules: vec![
            module("leads", "Leads", "Unqualified prospects", true, leads),
            module(
                "contacts",
                "Contacts",
                "People and companies in the pipeline",
                true,
                crud("Contact", "Contacts"),
            ),
            module("deals", "Deals", "Opportunities moving through stages", true, deals),
            module(
                "activities",
                "Activities",
                "Calls, meetings and follow-up tasks",
                false,
                activities,
            ),
        ],
    }
}

fn inventory() -> Application {
    let mut stock_adjustments = crud("Stock Adjustment", "Stock Adjustments");
    stock_adjustments.push(perm(
        "approve",
        "Approve Stock Adjustment",
        "Approve an adjustment before it hits stock levels",
    ));

    let mut transfer_orders = crud("Transfer Order", "Transfer Orders");
    transfer_orders.push(perm(
        "receive",
        "Receive Transfer",
        "Receive transferred stock at the destination warehouse",
    ));

    Application {
        app_code: "inventory".to_string(),
        app_name: "Inventory".to_string(),
        description: "Items, warehouses and stock movements".to_string(),
        icon: "boxes".to_string(),
        base_url: "/inventory".to_string(),
        version: "1.3.1".to_string(),
        is_core: false,
        sort_order: 3,
        modules: vec![
            module("items", "Items", "Products and services tracked in stock", true, crud("Item", "Items")),
            module(
                "warehouses",
                "Warehouses",
                "Physical stock locations",
                true,
                vec![
                    perm("create", "Create Warehouse", "Add a warehouse location"),
                    perm("read", "View Warehouses", "View warehouse locations and stock levels"),
                    perm("update", "Edit Warehouse", "Modify warehouse details"),
                    perm("deactivate", "Deactivate Warehouse", "Take a warehouse out of service"),
                ],
            ),
            module(
                "stock_adjustments",
                "Stock Adjustments",
                "Manual corrections to stock levels",
                false,
                stock_adjustments,
            ),
            module(
                "transfer_orders",
                "Transfer Orders",
                "Stock movements between warehouses",
                false,
                transfer_orders,
            ),
        ],
    }
}

fn analytics() -> Application {
    Application {
        app_code: "analytics".to_string(),
        app_name: "Analytics".to_string(),
        description: "Dashboards and cross-application reporting".to_string(),
        icon: "chart".to_string(),
        base_url: "/analytics".to_string(),
        version: "1.1.0".to_string(),
        is_core: false,
        sort_order: 4,
        modules: vec![
            module(
                "dashboard",
                "Dashboard",
                "The landing dashboard and its widgets",
                true,
                vec![
                    perm("view", "View Dashboard", "Open the dashboard"),
                    perm("customize", "Customize Dashboard", "Add, remove and arrange widgets"),
                    perm("export", "Export Dashboard", "Export dashboard data as a snapshot"),
                ],
            ),
            module(
                "reports",
                "Reports",
                "Prebuilt and custom reports",
                true,
                vec![
                    perm("read", "View Reports", "Run reports shared with the user"),
                    perm("read_all", "View All Reports", "Run every report in the organization"),
                    perm("create", "Create Report", "Build a custom report"),
                    perm("schedule", "Schedule Report", "Schedule a report for recurring delivery"),
                    perm("export", "Export Report", "Export report results"),
                ],
            ),
        ],
    }
}

fn payroll() -> Application {
    Application {
        app_code: "payroll".to_string(),
        app_name: "Payroll".to_string(),
        description: "Employee records and pay processing".to_string(),
        icon: "wallet".to_string(),
        base_url: "/payroll".to_string(),
        version: "0.8.0".to_string(),
        is_core: false,
        sort_order: 5,
        modules: vec![
            module(
                "employees",
                "Employees",
                "Employee profiles and compensation",
                true,
                crud("Employee", "Employees"),
            ),
            module(
                "pay_runs",
                "Pay Runs",
                "Periodic payroll execution",
                true,
                vec![
                    perm("create", "Create Pay Run", "Start a pay run for a schedule"),
                    perm("read", "View Pay Runs", "View pay run history and details"),
                    perm("approve", "Approve Pay Run", "Approve a pay run for disbursement"),
                    perm("process", "Process Pay Run", "Execute an approved pay run"),
                ],
            ),
            module(
                "pay_schedules",
                "Pay Schedules",
                "Recurring payroll calendars",
                false,
                vec![
                    perm("create", "Create Pay Schedule", "Define a payroll calendar"),
                    perm("read", "View Pay Schedules", "View payroll calendars"),
                    perm("update", "Edit Pay Schedule", "Modify a payroll calendar"),
                ],
            ),
        ],
    }
}
