//! Prompt text sent to the text model.

use super::context::{ConflictContext, MoveContext, OpportunityContext};

/// Standing instructions for every request.
pub const SYSTEM_PROMPT: &str = "\
You are the arbiter's narrator for \"Seven Luminaries: War for the Reversed Scale\", \
a multiplayer text game in which seven sects race to Yunmeng Marsh to claim the divine \
weapon known as the Reversed Scale. Write in the terse, vivid register of classic wuxia \
fiction.
Rules:
1. Every passage must name the hour of day (dawn, noon, the hour of the rat and so on).
2. Every passage must show how the day's weather shapes the action.
3. Colour the scene with the character of the sect involved.
4. Never invent items, tokens or plot hooks for later. Every event settles on the spot, \
as a change of stats or of distance.";

/// Prompt for an ordinary move.
#[must_use]
pub fn move_prompt(context: &MoveContext) -> String {
    let info = context.faction.info();
    let location = context.location;
    format!(
        "Day: {day}\n\
         Weather: {weather}\n\
         Sect: {name} ({title})\n\
         Location: {location_name}\n\
         Scene: {scene}\n\
         Action: travelling hard ({distance} li)\n\
         \n\
         Task:\n\
         1. Describe a short encounter on the road (under 100 words) set at {location_name}.\n\
         2. Draw on the scene description: \"{scene}\".\n\
         3. Show how the {weather} affects the march.\n\
         \n\
         Output format (fields separated by \"|||\"):\n\
         (leave empty) ||| story text ||| summary (four words at most)",
        day = context.day,
        weather = context.weather,
        name = info.name,
        title = info.title,
        location_name = location.name,
        scene = location.description,
        distance = context.distance,
    )
}

/// Prompt for two factions meeting on the road.
#[must_use]
pub fn conflict_prompt(context: &ConflictContext) -> String {
    format!(
        "Location: {location}\n\
         Weather: {weather}\n\
         Sides: {actor} vs {target}\n\
         \n\
         Task:\n\
         1. Describe the two sects meeting on a narrow road (around 60 words).\n\
         2. Work the {weather} into the atmosphere.\n\
         3. Leave open the possibility of facing an outside threat together.",
        location = context.location.name,
        weather = context.weather,
        actor = context.actor.name(),
        target = context.target.name(),
    )
}

/// Prompt for a chance encounter.
#[must_use]
pub fn opportunity_prompt(context: &OpportunityContext) -> String {
    let stats = context.stats;
    format!(
        "Role: you are a veteran wuxia novelist.\n\
         Sect: {name}\n\
         Sect stats: martial {martial}, strategy {strategy}, wealth {wealth}, prestige {prestige}\n\
         Location: {location}\n\
         Scene: {scene}\n\
         Weather: {weather}\n\
         Inspiration: {scenario}\n\
         \n\
         Task: write an immersive encounter with detailed branches for the arbiter to rule on.\n\
         \n\
         Output three parts separated by \"|||\":\n\
         Part one: the encounter title (a few words, classical in tone)\n\
         Part two: the story (around 150 words, using the scene \"{scene}\" and the weather)\n\
         Part three: the arbiter's ruling guide (branch by branch)\n\
         \n\
         Outcomes may only change stats or distance. No items.",
        name = context.faction.name(),
        martial = stats.martial,
        strategy = stats.strategy,
        wealth = stats.wealth,
        prestige = stats.prestige,
        location = context.location.name,
        scene = context.location.description,
        weather = context.weather,
        scenario = context.scenario,
    )
}
