//! Static route table.
//!
//! Routes nest: children inherit their parent's metadata and may override
//! individual keys. Views are named, not loaded; whoever renders a
//! [`View`] resolves it to a component lazily.

use std::fmt;

use crate::state::session::{ROLE_STUDENT, ROLE_TEACHER};

/// Every page (or layout) a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    MainLayout,
    Home,
    Courses,
    CourseDetail,
    MyCourses,
    Teach,
    MaterialCreate,
    Exams,
    ExamDetail,
    Reports,
    Qa,
    Profile,
}

impl View {
    /// Module path of the component, relative to the UI source root.
    pub fn component(self) -> &'static str {
        match self {
            Self::Login => "views/Login",
            Self::Register => "views/Register",
            Self::MainLayout => "layouts/MainLayout",
            Self::Home => "views/Home",
            Self::Courses => "views/Courses",
            Self::CourseDetail => "views/CourseDetail",
            Self::MyCourses => "views/MyCourses",
            Self::Teach => "views/Teach",
            Self::MaterialCreate => "views/MaterialCreate",
            Self::Exams => "views/Exams",
            Self::ExamDetail => "views/ExamDetail",
            Self::Reports => "views/Reports",
            Self::Qa => "views/QA",
            Self::Profile => "views/Profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

/// Role a route is intended for. Declarative only; the guard ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCode {
    Teacher,
    Student,
}

impl RoleCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => ROLE_TEACHER,
            Self::Student => ROLE_STUDENT,
        }
    }
}

/// Per-route metadata. `None` means "not set on this route".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: Option<bool>,
    pub role: Option<RoleCode>,
}

impl RouteMeta {
    pub const EMPTY: Self = Self { requires_auth: None, role: None };
    pub const PUBLIC: Self = Self { requires_auth: Some(false), role: None };
    pub const PROTECTED: Self = Self { requires_auth: Some(true), role: None };

    pub const fn role(role: RoleCode) -> Self {
        Self { requires_auth: None, role: Some(role) }
    }

    /// Effective auth requirement: unset means protected.
    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(true)
    }

    /// Layer `child` over `self`; keys the child sets win.
    #[must_use]
    pub fn merge(self, child: Self) -> Self {
        Self { requires_auth: child.requires_auth.or(self.requires_auth), role: child.role.or(self.role) }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    /// Absolute for top-level routes, relative to the parent for children.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: View,
    pub meta: RouteMeta,
    pub children: &'static [RouteDef],
}

impl RouteDef {
    const fn leaf(path: &'static str, name: &'static str, view: View, meta: RouteMeta) -> Self {
        Self { path, name: Some(name), view, meta, children: &[] }
    }
}

const MAIN_CHILDREN: &[RouteDef] = &[
    RouteDef::leaf("", "Home", View::Home, RouteMeta::EMPTY),
    RouteDef::leaf("courses", "Courses", View::Courses, RouteMeta::EMPTY),
    RouteDef::leaf("courses/:id", "CourseDetail", View::CourseDetail, RouteMeta::EMPTY),
    RouteDef::leaf("my-courses", "MyCourses", View::MyCourses, RouteMeta::role(RoleCode::Student)),
    RouteDef::leaf("teach", "Teach", View::Teach, RouteMeta::role(RoleCode::Teacher)),
    RouteDef::leaf("material/create", "MaterialCreate", View::MaterialCreate, RouteMeta::role(RoleCode::Teacher)),
    RouteDef::leaf("exams", "Exams", View::Exams, RouteMeta::EMPTY),
    RouteDef::leaf("exams/:id", "ExamDetail", View::ExamDetail, RouteMeta::EMPTY),
    RouteDef::leaf("reports", "Reports", View::Reports, RouteMeta::EMPTY),
    RouteDef::leaf("qa", "QA", View::Qa, RouteMeta::EMPTY),
    RouteDef::leaf("profile", "Profile", View::Profile, RouteMeta::EMPTY),
];

/// The application's route table.
pub static ROUTES: &[RouteDef] = &[
    RouteDef::leaf("/login", "Login", View::Login, RouteMeta::PUBLIC),
    RouteDef::leaf("/register", "Register", View::Register, RouteMeta::PUBLIC),
    RouteDef { path: "/", name: None, view: View::MainLayout, meta: RouteMeta::PROTECTED, children: MAIN_CHILDREN },
];
