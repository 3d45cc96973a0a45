//! Role-to-menu resolver.
//!
//! `menu_for` is the single mapping table from role to tree; adding a role
//! means adding one arm there.

use super::{MenuEntry, MenuId};
use crate::system::roles::Role;

fn leaf(id: &'static str, label: &'static str, icon: &'static str, link: String) -> MenuEntry {
    MenuEntry::Leaf {
        id: MenuId(id),
        label,
        icon,
        link,
    }
}

fn branch(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    children: Vec<MenuEntry>,
) -> MenuEntry {
    MenuEntry::Branch {
        id: MenuId(id),
        label,
        icon,
        children,
    }
}

/// Resolves a raw role string. Unknown or absent roles get an empty menu.
pub fn resolve_menu(role: Option<&str>) -> Vec<MenuEntry> {
    role.and_then(Role::parse).map(menu_for).unwrap_or_default()
}

pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    let s = role.section();
    let at = |path: &str| format!("{s}{path}");

    match role {
        Role::Ceo => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "overview",
                "Overview",
                "activity",
                vec![
                    leaf("overview.projects", "Projects", "layers", at("/projects")),
                    leaf("overview.sales", "Sales", "cash", at("/sales")),
                ],
            ),
            branch(
                "finance",
                "Finance",
                "dollar-sign",
                vec![
                    leaf("finance.expenses", "Expenses", "receipt", at("/expenses")),
                    leaf("finance.assets", "Assets", "building", at("/assets")),
                    leaf("finance.payroll", "Payroll", "credit-card", at("/payroll")),
                    branch(
                        "finance.reports",
                        "Reports",
                        "file-text",
                        vec![
                            leaf(
                                "finance.reports.profit",
                                "Profit & Loss",
                                "percent",
                                at("/reports/profit"),
                            ),
                            leaf(
                                "finance.reports.cashflow",
                                "Cash Flow",
                                "dollar-sign",
                                at("/reports/cashflow"),
                            ),
                        ],
                    ),
                ],
            ),
            branch(
                "operations",
                "Operations",
                "package",
                vec![
                    leaf("operations.inventory", "Inventory", "package", at("/inventory")),
                    leaf("operations.workers", "Workers", "users", at("/workers")),
                ],
            ),
        ],
        Role::Admin => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "management",
                "Management",
                "settings",
                vec![
                    leaf("management.projects", "Projects", "layers", at("/projects")),
                    leaf("management.workers", "Workers", "users", at("/workers")),
                    leaf("management.users", "Users", "user", at("/users")),
                ],
            ),
            branch(
                "finance",
                "Finance",
                "dollar-sign",
                vec![
                    leaf("finance.expenses", "Expenses", "receipt", at("/expenses")),
                    leaf("finance.assets", "Assets", "building", at("/assets")),
                    branch(
                        "finance.payroll",
                        "Payroll",
                        "credit-card",
                        vec![
                            leaf(
                                "finance.payroll.runs",
                                "Payroll Runs",
                                "calendar",
                                at("/payroll/runs"),
                            ),
                            leaf(
                                "finance.payroll.advances",
                                "Advances",
                                "cash",
                                at("/payroll/advances"),
                            ),
                        ],
                    ),
                ],
            ),
            branch(
                "stock",
                "Stock & Sales",
                "store",
                vec![
                    leaf("stock.inventory", "Inventory", "package", at("/inventory")),
                    leaf("stock.sales", "Sales", "cash", at("/sales")),
                ],
            ),
        ],
        Role::Accountant => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "finance",
                "Finance",
                "dollar-sign",
                vec![
                    leaf("finance.expenses", "Expenses", "receipt", at("/expenses")),
                    leaf("finance.payroll", "Payroll", "credit-card", at("/payroll")),
                    leaf("finance.assets", "Assets", "building", at("/assets")),
                ],
            ),
            branch(
                "reports",
                "Reports",
                "file-text",
                vec![
                    leaf("reports.sales", "Sales Report", "cash", at("/reports/sales")),
                    leaf(
                        "reports.expenses",
                        "Expense Report",
                        "receipt",
                        at("/reports/expenses"),
                    ),
                ],
            ),
        ],
        Role::FactoryManager => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "production",
                "Production",
                "layers",
                vec![
                    leaf("production.workers", "Workers", "users", at("/workers")),
                    leaf("production.inventory", "Materials", "package", at("/inventory")),
                    leaf("production.assets", "Equipment", "building", at("/assets")),
                ],
            ),
            leaf("expenses", "Expenses", "receipt", at("/expenses")),
        ],
        Role::ProjectManager => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "projects",
                "Projects",
                "layers",
                vec![
                    leaf("projects.list", "All Projects", "list", at("/projects")),
                    leaf("projects.workers", "Assigned Workers", "users", at("/workers")),
                ],
            ),
            leaf("expenses", "Expenses", "receipt", at("/expenses")),
        ],
        Role::StoreKeeper => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "inventory",
                "Inventory",
                "package",
                vec![
                    leaf("inventory.stock", "Stock", "package", at("/inventory/stock")),
                    leaf(
                        "inventory.receipts",
                        "Receipts",
                        "import",
                        at("/inventory/receipts"),
                    ),
                    leaf(
                        "inventory.transfers",
                        "Transfers",
                        "layers",
                        at("/inventory/transfers"),
                    ),
                ],
            ),
        ],
        Role::ShopKeeper => vec![
            leaf("dashboard", "Dashboard", "bar-chart", at("/dashboard")),
            branch(
                "sales",
                "Sales",
                "cash",
                vec![
                    leaf("sales.new", "New Sale", "shopping-cart", at("/sales/new")),
                    leaf("sales.history", "Sales History", "list", at("/sales/history")),
                ],
            ),
            leaf("inventory", "Inventory", "package", at("/inventory")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::navigation::branch_ids;
    use std::collections::HashSet;

    fn all_ids(tree: &[MenuEntry], out: &mut Vec<MenuId>) {
        for entry in tree {
            out.push(entry.id());
            if let MenuEntry::Branch { children, .. } = entry {
                all_ids(children, out);
            }
        }
    }

    fn leaf_links(tree: &[MenuEntry], out: &mut Vec<String>) {
        for entry in tree {
            match entry {
                MenuEntry::Leaf { link, .. } => out.push(link.clone()),
                MenuEntry::Branch { children, .. } => leaf_links(children, out),
            }
        }
    }

    #[test]
    fn test_known_roles_have_deterministic_non_empty_menus() {
        for role in Role::ALL {
            let first = resolve_menu(Some(role.as_str()));
            assert!(!first.is_empty(), "empty menu for {role}");
            assert_eq!(first, resolve_menu(Some(role.as_str())));
            assert_eq!(first, menu_for(role));
        }
    }

    #[test]
    fn test_unknown_or_missing_role_gets_empty_menu() {
        assert!(resolve_menu(None).is_empty());
        assert!(resolve_menu(Some("")).is_empty());
        assert!(resolve_menu(Some("superuser")).is_empty());
    }

    #[test]
    fn test_ids_are_unique_per_tree() {
        for role in Role::ALL {
            let mut ids = Vec::new();
            all_ids(&menu_for(role), &mut ids);
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicate id in {role} menu");
        }
    }

    #[test]
    fn test_links_stay_in_role_section() {
        for role in Role::ALL {
            let mut links = Vec::new();
            leaf_links(&menu_for(role), &mut links);
            assert!(links.contains(&role.home()));
            for link in links {
                assert_eq!(Role::owning_section(&link), Some(role), "{link}");
            }
        }
    }

    #[test]
    fn test_branches_are_never_empty() {
        fn check(tree: &[MenuEntry]) {
            for entry in tree {
                if let MenuEntry::Branch { id, children, .. } = entry {
                    assert!(!children.is_empty(), "branch {id} has no children");
                    check(children);
                }
            }
        }
        for role in Role::ALL {
            check(&menu_for(role));
        }
    }

    #[test]
    fn test_admin_menu_contains_expenses_leaf() {
        let mut links = Vec::new();
        leaf_links(&resolve_menu(Some("admin")), &mut links);
        assert!(links.iter().any(|l| l == "/admin/expenses"));
        assert!(branch_ids(&menu_for(Role::Admin)).contains(&MenuId("finance.payroll")));
    }
}
