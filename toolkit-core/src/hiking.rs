use serde::Serialize;

/// What to do when meeting an animal on the trail.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WildlifeSafety {
	pub large_animals: &'static str,
	pub snakes: &'static str,
	pub ticks: &'static str,
}

/// Content of the hiking safety guide.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HikingGuide {
	pub priority: &'static str,
	pub categories: Vec<&'static str>,
	pub essential_gear: Vec<&'static str>,
	pub weather_hazards: Vec<&'static str>,
	pub wildlife: WildlifeSafety,
	/// In the order they should be followed.
	pub emergency_steps: Vec<&'static str>,
}

/// Returns the guide.
pub fn guide() -> HikingGuide {
	HikingGuide {
		priority: "Life safety is #1",
		categories: vec![
			"pre-hike preparation",
			"essential gear",
			"during the hike",
			"weather hazards",
			"injury prevention",
			"wildlife encounters",
			"emergency procedures",
		],
		essential_gear: vec![
			"water",
			"hiking boots",
			"weather-appropriate clothing",
			"rain jacket",
			"sun hat",
			"sunscreen",
			"first aid kit",
			"emergency whistle",
			"headlamp",
			"map and compass",
			"phone with power bank",
		],
		weather_hazards: vec!["lightning", "extreme heat", "cold/hypothermia", "flash floods"],
		wildlife: WildlifeSafety {
			large_animals: "make noise, back away",
			snakes: "watch step, give space",
			ticks: "use repellent, remove with tweezers",
		},
		emergency_steps: vec![
			"stay calm",
			"assess situation",
			"call for help",
			"stay in place",
			"apply first aid",
			"stay warm",
		],
	}
}
