use crate::cqrs::Command;

/// Record a new location. The store assigns the id.
#[derive(Debug, Clone)]
pub struct AddLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub name: Option<String>,
    pub added_by: String,
    pub screenshot_url: Option<String>,
}

impl Command for AddLocation {
    type Output = i64;
}

#[derive(Debug, Clone)]
pub struct EditDescription {
    pub id: i64,
    pub description: String,
}

impl Command for EditDescription {
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct EditName {
    pub id: i64,
    pub name: String,
}

impl Command for EditName {
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct EditPosition {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Command for EditPosition {
    type Output = ();
}

/// Set or clear the screenshot. `None` removes the stored URL entirely.
#[derive(Debug, Clone)]
pub struct EditScreenshot {
    pub id: i64,
    pub screenshot_url: Option<String>,
}

impl Command for EditScreenshot {
    type Output = ();
}
