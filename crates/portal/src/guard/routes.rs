use shared::model::Role;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/manage/dashboard";
pub const PROFILE_PATH: &str = "/manage/profile";

const STAFF: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Csr, Role::Instructor];
const OFFICE: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Csr];
const ADMINS: &[Role] = &[Role::SuperAdmin, Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Blank,
    Admin,
    Student,
}

impl Layout {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Layout::Student,
            _ => Layout::Admin,
        }
    }
}

/// Who may open a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Anyone, signed in or not.
    Public,
    /// Only visitors; signed-in users are sent to their landing page.
    PublicOnly,
    Authenticated,
    Roles(&'static [Role]),
}

impl Audience {
    pub fn admits(&self, role: Option<Role>) -> bool {
        match self {
            Audience::Public | Audience::PublicOnly | Audience::Authenticated => true,
            Audience::Roles(roles) => role.is_some_and(|r| roles.contains(&r)),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Audience::Authenticated | Audience::Roles(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub audience: Audience,
    /// Sidebar label, when the page has one.
    pub nav: Option<&'static str>,
    /// The page only forwards signed-in users to their landing page.
    pub redirect_to_landing: bool,
}

impl RouteEntry {
    const fn new(path: &'static str, audience: Audience) -> Self {
        Self {
            path,
            audience,
            nav: None,
            redirect_to_landing: false,
        }
    }

    const fn nav(mut self, name: &'static str) -> Self {
        self.nav = Some(name);
        self
    }

    const fn landing(mut self) -> Self {
        self.redirect_to_landing = true;
        self
    }

    /// Matches `:param` segments against any non-empty segment.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = |p: &'static str| p.trim_end_matches('/');
        let pattern = trimmed(self.path);
        let path = path.trim_end_matches('/');

        let mut expected = pattern.split('/');
        let mut actual = path.split('/');
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(e), Some(a)) if e.starts_with(':') => {
                    if a.is_empty() {
                        return false;
                    }
                }
                (Some(e), Some(a)) if e == a => {}
                _ => return false,
            }
        }
    }

    pub fn layout(&self, role: Option<Role>) -> Layout {
        match (self.audience.requires_session(), role) {
            (true, Some(role)) => Layout::for_role(role),
            _ => Layout::Blank,
        }
    }
}

static ROUTES: &[RouteEntry] = &[
    RouteEntry::new("/", Audience::Authenticated).landing(),
    RouteEntry::new(LOGIN_PATH, Audience::PublicOnly),
    RouteEntry::new("/signup", Audience::PublicOnly),
    RouteEntry::new("/verify", Audience::Public),
    RouteEntry::new(DASHBOARD_PATH, Audience::Roles(STAFF)).nav("Dashboard"),
    RouteEntry::new(PROFILE_PATH, Audience::Authenticated).nav("My Profile"),
    RouteEntry::new("/manage/profile/:id", Audience::Roles(STAFF)),
    RouteEntry::new(
        "/manage/driving-test-appointment-confirmation",
        Audience::Authenticated,
    )
    .nav("Appointment"),
    RouteEntry::new("/manage/certificate", Audience::Authenticated).nav("Certificates"),
    RouteEntry::new("/manage/accounting", Audience::Authenticated).nav("Accounting"),
    RouteEntry::new("/manage/instructor", Audience::Roles(OFFICE)).nav("Instructor"),
    RouteEntry::new("/manage/student-management", Audience::Roles(STAFF)).nav("Students"),
    RouteEntry::new("/manage/add-new-student", Audience::Roles(OFFICE)),
    RouteEntry::new("/manage/user-management", Audience::Roles(ADMINS)).nav("User Management"),
];

/// Declarative page table: audience, layout, landing page and sidebar per role.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteEntry],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteTable {
    pub fn entries(&self) -> &'static [RouteEntry] {
        self.routes
    }

    pub fn find(&self, path: &str) -> Option<&'static RouteEntry> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn landing(&self, role: Role) -> &'static str {
        match role {
            Role::Student => PROFILE_PATH,
            _ => DASHBOARD_PATH,
        }
    }

    pub fn nav_items(&self, role: Role) -> Vec<NavItem> {
        self.routes
            .iter()
            .filter(|route| route.audience.requires_session() && route.audience.admits(Some(role)))
            .filter_map(|route| {
                route.nav.map(|name| NavItem {
                    name,
                    path: route.path,
                })
            })
            .collect()
    }
}
