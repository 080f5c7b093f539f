//! Sidebar navigation, filtered by role.
//!
//! The menu is data: [`menu_for`] returns the sections a role may see and the
//! web crate maps each [`NavTarget`] onto its route enum. Keeping the table
//! here lets it be tested without a router.

use store::Role;

/// A sidebar destination, independent of the router type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Overview,
    Authors,
    Categories,
    MyLoans,
    MyFines,
    Dashboard,
    ManageBooks,
    ManageAuthors,
    ManageCategories,
    ManageLoans,
    ManageFines,
    ManageUsers,
    Reports,
    Profile,
    Notifications,
}

/// Icon shown next to a menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Chart,
    Feather,
    Tags,
    Book,
    Money,
    Gauge,
    Exchange,
    Users,
    File,
    User,
    Bell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub target: NavTarget,
    pub label: &'static str,
    pub icon: NavIcon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

const fn item(target: NavTarget, label: &'static str, icon: NavIcon) -> NavItem {
    NavItem { target, label, icon }
}

const MEMBER_MAIN: &[NavItem] = &[
    item(NavTarget::Home, "Home", NavIcon::Home),
    item(NavTarget::Overview, "Overview", NavIcon::Chart),
    item(NavTarget::Authors, "Authors", NavIcon::Feather),
    item(NavTarget::Categories, "Categories", NavIcon::Tags),
    item(NavTarget::MyLoans, "Active Loans", NavIcon::Book),
    item(NavTarget::MyFines, "My Fines", NavIcon::Money),
];

const ADMIN_MAIN: &[NavItem] = &[item(NavTarget::Dashboard, "Dashboard", NavIcon::Gauge)];

const MANAGEMENT: &[NavItem] = &[
    item(NavTarget::ManageBooks, "Books", NavIcon::Book),
    item(NavTarget::ManageAuthors, "Authors", NavIcon::Feather),
    item(NavTarget::ManageCategories, "Categories", NavIcon::Tags),
    item(NavTarget::ManageLoans, "Loans", NavIcon::Exchange),
    item(NavTarget::ManageFines, "Fines", NavIcon::Money),
    item(NavTarget::ManageUsers, "Users", NavIcon::Users),
    item(NavTarget::Reports, "Reports", NavIcon::File),
];

const SETTINGS: &[NavItem] = &[
    item(NavTarget::Profile, "Profile", NavIcon::User),
    item(NavTarget::Notifications, "Notifications", NavIcon::Bell),
];

pub fn menu_for(role: Role) -> Vec<NavSection> {
    let mut sections = Vec::with_capacity(3);
    match role {
        Role::Member => sections.push(NavSection {
            title: "Main Menu",
            items: MEMBER_MAIN.to_vec(),
        }),
        Role::Admin => {
            sections.push(NavSection {
                title: "Main Menu",
                items: ADMIN_MAIN.to_vec(),
            });
            sections.push(NavSection {
                title: "Management",
                items: MANAGEMENT.to_vec(),
            });
        }
    }
    sections.push(NavSection {
        title: "Settings",
        items: SETTINGS.to_vec(),
    });
    sections
}

pub fn sidebar_title(role: Role) -> &'static str {
    match role {
        Role::Admin => "E-Library Admin",
        Role::Member => "E-Library",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(role: Role) -> Vec<NavTarget> {
        menu_for(role)
            .into_iter()
            .flat_map(|s| s.items)
            .map(|i| i.target)
            .collect()
    }

    #[test]
    fn test_member_never_sees_management() {
        let member = targets(Role::Member);
        assert!(member.contains(&NavTarget::Home));
        assert!(member.contains(&NavTarget::MyFines));
        assert!(!member.contains(&NavTarget::ManageBooks));
        assert!(!member.contains(&NavTarget::Dashboard));
        assert_eq!(menu_for(Role::Member).len(), 2);
    }

    #[test]
    fn test_admin_menu() {
        let sections = menu_for(Role::Admin);
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Main Menu", "Management", "Settings"]);
        assert_eq!(sections[1].items.len(), 7);
        assert!(!targets(Role::Admin).contains(&NavTarget::MyLoans));
    }

    #[test]
    fn test_settings_shared() {
        for role in [Role::Member, Role::Admin] {
            let last = menu_for(role).pop().unwrap();
            assert_eq!(last.title, "Settings");
            assert_eq!(last.items[0].target, NavTarget::Profile);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(sidebar_title(Role::Admin), "E-Library Admin");
        assert_eq!(sidebar_title(Role::Member), "E-Library");
    }
}
