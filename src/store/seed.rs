//! Hard-coded seed data.
//!
//! Records are created once at process start and never mutated or deleted.

use crate::domain::{Device, Policy, Ticket, User};

pub fn devices() -> Vec<Device> {
    vec![
        Device::new("dev-001", "Production Server", "server"),
        Device::new("dev-002", "Database Instance", "database"),
        Device::new("dev-003", "Load Balancer", "network"),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User::new("user-001", "John Doe", "john@example.com", "admin"),
        User::new("user-002", "Jane Smith", "jane@example.com", "user"),
        User::new("user-003", "Bob Johnson", "bob@example.com", "user"),
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            "ticket-001",
            "Server downtime",
            "Production server is not responding",
        ),
        Ticket::new(
            "ticket-002",
            "Database slow query",
            "Query performance degraded",
        ),
        Ticket::new(
            "ticket-003",
            "Network connectivity",
            "Intermittent connection issues",
        ),
    ]
}

pub fn policies() -> Vec<Policy> {
    vec![
        Policy::new(
            "pol-001",
            "Security Policy",
            "Basic security rules",
            vec![
                "Require MFA".to_string(),
                "Password complexity".to_string(),
                "Session timeout".to_string(),
            ],
        ),
        Policy::new(
            "pol-002",
            "Data Retention",
            "Data lifecycle management",
            vec![
                "Backup daily".to_string(),
                "Archive after 1 year".to_string(),
                "Delete after 7 years".to_string(),
            ],
        ),
    ]
}
