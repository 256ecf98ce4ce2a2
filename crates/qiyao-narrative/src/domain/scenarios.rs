//! Seed premises for chance encounters.
//!
//! Each seed names a situation and the choices the arbiter may offer. The
//! narrator expands one into a full encounter; outcomes are limited to stat
//! or distance changes, never items.

use qiyao_core::rng::DeterministicRng;

/// The fixed list of encounter seeds.
pub const SCENARIOS: [&str; 19] = [
    "The sealed letter at Wild Goose Slope (clear noon; a wax-sealed letter lies in the grass and a young lord rides up demanding it. Choices: demand a reward / probe his story / hand it back freely)",
    "A plot in the ruined mountain shrine (stormy night; figures in black whisper of a sect treasure beyond a thin wall. Choices: ambush / eavesdrop / step out and cow them)",
    "Bones beneath the cliff (a misstep in the fog reveals weathered bones beside a torn sword manual. Choices: take the manual / bury the dead / search for a hidden mechanism)",
    "The locked combatants (two masters lie dead in a valley, a strange glowing treasure between them. Choices: seize it / try to save them / wait and profit)",
    "A nameless swordsman's gift (a down-at-heel swordsman offers an old sword tassel. Choices: accept / refuse / ask why)",
    "Drunken talk at the black inn (a snowy night; a drunk at the next table boasts of a tomb full of riches. Choices: ply him with wine / ignore him / follow him)",
    "Driftwood on the torrent (after the flood crest, a foreign corpse is lashed to floating timber. Choices: haul it in / watch from afar / report it)",
    "The endgame under the old locust tree (an unattended board game at the village gate; a move triggers a trap. Choices: solve it / smash the board / lie in wait)",
    "The weeping orphan (a child cries before the ruins, clutching a metal shard. Choices: take the child in / question the child / walk on)",
    "The gambling house trick (an old man beats the house with uncanny skill, then leaves sighing. Choices: ask to be his pupil / escort him / challenge him)",
    "The bloodied kasaya (a monk dies in the forest and entrusts a bloodstained robe. Choices: deliver it / keep it / destroy it)",
    "Flute under the moon (a lone grave in an empty village, a mournful flute playing. Choices: play along / dig up the grave / drive off the spirit)",
    "The dusty blade at the pawnshop (a rusted saber in the corner hums with inner energy. Choices: buy it / seize it / sound out the owner)",
    "The storyteller's tale (a teahouse storyteller recounts secrets of the fallen dynasty. Choices: tip him / blackmail him / guard him in secret)",
    "The poisoned hawk (a messenger hawk falls from the sky, a warning tied to its leg. Choices: intercept the message / heal and release it / forge a reply)",
    "The secret of the well (chained bones lie at the bottom of a dry well. Choices: unlock the chains / seal the well / perform last rites)",
    "Zither music on the painted boat (an empty pleasure boat on the river, exquisite zither music inviting guests aboard. Choices: board / snap the strings with inner force / swim beneath)",
    "The wolves' fear (a pack surrounds the camp and then scatters as a stranger steps from the shadows. Choices: fight / bargain / ally)",
    "The tofu maker's kung fu (an old tofu seller lifts a thousand-jin millstone with one hand. Choices: spar / steal his technique / buy some tofu)",
];

/// Picks one seed with the injected RNG.
pub fn pick_scenario(rng: &mut dyn DeterministicRng) -> &'static str {
    let last = u32::try_from(SCENARIOS.len() - 1).unwrap_or(0);
    let index = usize::try_from(rng.next_u32_range(0, last)).unwrap_or(0);
    SCENARIOS.get(index).copied().unwrap_or(SCENARIOS[0])
}
