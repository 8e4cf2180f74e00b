use serde::{Deserialize, Serialize};

/// Broad family a tool belongs to, used as a tag on the tool cards.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
	Game,
	Utility,
	Guide,
	Converter,
	Calculator,
}

/// Availability of a tool.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
	#[default]
	Active,
	Beta,
	ComingSoon,
}

/// An entry of the tool catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tool {
	/// Stable identifier, also used in API paths.
	pub id: String,
	pub name: String,
	pub category: ToolCategory,
	pub description: String,
	#[serde(default)]
	pub status: ToolStatus,
}

impl Tool {
	fn active(id: &str, name: &str, category: ToolCategory, description: &str) -> Self {
		Self {
			id: id.to_owned(),
			name: name.to_owned(),
			category,
			description: description.to_owned(),
			status: ToolStatus::Active,
		}
	}
}

pub const SPIN_WHEEL_ID: &str = "spin-wheel";
pub const CURRENCY_ID: &str = "currency";
pub const HIKING_GUIDE_ID: &str = "hiking-guide";

/// Returns every available tool, in display order.
pub fn catalog() -> Vec<Tool> {
	vec![
		Tool::active(
			SPIN_WHEEL_ID,
			"Spin Wheel",
			ToolCategory::Game,
			"Spin a wheel of weighted options, skip recent winners and share it by link",
		),
		Tool::active(
			CURRENCY_ID,
			"Currency Converter",
			ToolCategory::Utility,
			"Convert amounts between USD, SGD and CNY",
		),
		Tool::active(
			HIKING_GUIDE_ID,
			"Hiking Safety Guide",
			ToolCategory::Guide,
			"Preparation, gear, hazards and emergency steps for a safe hike",
		),
	]
}

/// Looks a tool up by id.
pub fn find(id: &str) -> Option<Tool> {
	catalog().into_iter().find(|tool| tool.id == id)
}
