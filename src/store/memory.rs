//! The seeded, read-only resource store.

use crate::domain::{Device, Policy, Ticket, User};
use crate::store::seed;

/// Fixed, in-memory lists of mock records.
///
/// Constructed once at startup and shared immutably across handlers. Nothing
/// mutates after seeding, so no locking is needed.
pub struct ResourceStore {
    devices: Vec<Device>,
    users: Vec<User>,
    tickets: Vec<Ticket>,
    policies: Vec<Policy>,
}

impl ResourceStore {
    /// Build a store from explicit record lists.
    pub fn new(
        devices: Vec<Device>,
        users: Vec<User>,
        tickets: Vec<Ticket>,
        policies: Vec<Policy>,
    ) -> Self {
        Self {
            devices,
            users,
            tickets,
            policies,
        }
    }

    /// Build the store from the hard-coded seed data.
    pub fn with_seed_data() -> Self {
        Self::new(
            seed::devices(),
            seed::users(),
            seed::tickets(),
            seed::policies(),
        )
    }

    /// All devices, in seed order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// First device with the given id.
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// All users, in seed order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// First user with the given id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All tickets, in seed order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// First ticket with the given id.
    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets whose status equals `status` (case-sensitive exact match).
    pub fn tickets_with_status(&self, status: &str) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    /// All policies, in seed order.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// First policy with the given id.
    pub fn policy(&self, id: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }
}
