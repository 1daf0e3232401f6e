//! Route table and lookup.

use crate::fixtures::Fixture;
use crate::http::handlers;

/// A single fixture route.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Route identifier for logging.
    pub name: &'static str,
    /// Exact request path.
    pub path: &'static str,
    /// Produces the response document.
    pub handler: fn() -> Fixture,
}

/// Every route the server answers.
pub const ROUTES: &[Route] = &[
    Route {
        name: "otp-generate",
        path: "/v1/otpmanager/otp/generate",
        handler: handlers::generate_otp,
    },
    Route {
        name: "audit",
        path: "/v1/auditmanager/audits",
        handler: handlers::record_audit,
    },
    Route {
        name: "sms-send",
        path: "/v1/notifier/sms/send",
        handler: handlers::send_sms,
    },
    Route {
        name: "token",
        path: "/auth/realms/mosip/protocol/openid-connect/token",
        handler: handlers::issue_token,
    },
    Route {
        name: "ui-spec",
        path: "/masterdata/ui-spec",
        handler: handlers::ui_spec,
    },
    Route {
        name: "identity-schema",
        path: "/masterdata/identity-schema",
        handler: handlers::identity_schema,
    },
];

/// Immutable view over a set of routes.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    /// Wrap a route list.
    pub const fn new(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Exact-path lookup.
    pub fn lookup(&self, path: &str) -> Option<&'static Route> {
        self.routes.iter().find(|route| route.path == path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}
