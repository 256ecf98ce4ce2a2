//! The fixed table of named waypoints along the race track.
//!
//! Progress is an integer distance from the start (0) to the goal (120);
//! every integer progress value names exactly one waypoint. A faction's
//! location is always looked up from its progress and never cached.

use serde::Serialize;

/// Progress value of the starting sanctuary.
pub const START_PROGRESS: i32 = 0;

/// Progress value of the goal.
pub const GOAL_PROGRESS: i32 = 120;

/// Number of waypoints on the track (one per integer progress value).
pub const LOCATION_COUNT: usize = 121;

/// An immutable waypoint on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Progress value at which this waypoint sits.
    pub index: i32,
    /// Unique display name.
    pub name: &'static str,
    /// Short scene description handed to the narrator.
    pub description: &'static str,
}

impl Location {
    const fn new(index: i32, name: &'static str, description: &'static str) -> Self {
        Self {
            index,
            name,
            description,
        }
    }

    /// Returns `true` for the two sanctuary waypoints (start and goal).
    #[must_use]
    pub fn is_terminus(&self) -> bool {
        self.index == START_PROGRESS || self.index == GOAL_PROGRESS
    }
}

/// Clamps any raw progress value onto the track.
#[must_use]
pub fn clamp_progress(progress: i64) -> i32 {
    // The clamp guarantees the value fits.
    i32::try_from(progress.clamp(i64::from(START_PROGRESS), i64::from(GOAL_PROGRESS)))
        .unwrap_or(START_PROGRESS)
}

/// Returns the waypoint at `progress`, clamping out-of-range values to the
/// nearest end of the track.
#[must_use]
pub fn location_of(progress: i32) -> &'static Location {
    let index = usize::try_from(progress.clamp(START_PROGRESS, GOAL_PROGRESS)).unwrap_or(0);
    &LOCATIONS[index]
}

/// The full track, indexed by progress.
pub static LOCATIONS: [Location; LOCATION_COUNT] = [
    Location::new(0, "Seven Luminaries Hall", "The mustering hall where the seven sects gather before setting out."),
    Location::new(1, "Hall Gate Stele", "A weathered stele marking the last stone of the hall's forecourt."),
    Location::new(2, "Pine Wind Path", "A narrow trail where the wind hisses through old pines."),
    Location::new(3, "Stone Lion Bridge", "An arched bridge guarded by two moss-covered stone lions."),
    Location::new(4, "Willow Ferry", "A ferry landing shaded by drooping willows and a sleepy boatman."),
    Location::new(5, "Apricot Blossom Village", "A farming hamlet known for its apricot wine."),
    Location::new(6, "Old Post Road", "A rutted imperial road worn deep by centuries of carts."),
    Location::new(7, "Ten-Li Pavilion", "A roadside pavilion where travellers traditionally say farewell."),
    Location::new(8, "Fallen Goose Slope", "A grassy slope where migrating geese come down to rest."),
    Location::new(9, "Broken Bell Temple", "A half-ruined temple whose great bell lies cracked in the yard."),
    Location::new(10, "Green Bamboo Grove", "A dense grove where sunlight falls in thin green shafts."),
    Location::new(11, "Mountain God Shrine", "A tiny shrine to the mountain god, incense long gone cold."),
    Location::new(12, "Clear Stream Ford", "A shallow ford over pebbles clear enough to count."),
    Location::new(13, "Red Dust Inn", "A busy inn where rumours are cheaper than the rice."),
    Location::new(14, "Iron Chain Gorge", "A gorge crossed only by two rusted iron chains."),
    Location::new(15, "Hanging Cliff Path", "A plank walkway pinned to the face of a sheer cliff."),
    Location::new(16, "Crane Return Peak", "A lonely peak where white cranes roost at dusk."),
    Location::new(17, "White Cloud Monastery", "A monastery wrapped in cloud for most of the year."),
    Location::new(18, "Misty Valley", "A valley where morning fog lingers until noon."),
    Location::new(19, "Three Forks Crossroads", "Three roads meet beneath a crooked signpost."),
    Location::new(20, "Wolf Howl Ridge", "A bare ridge where wolves call to each other at night."),
    Location::new(21, "Abandoned Fortress", "The crumbling walls of a frontier fort nobody mans."),
    Location::new(22, "Thousand-Step Stair", "A stone stairway carved straight up the mountainside."),
    Location::new(23, "Jade Spring", "A spring of pale green water said to sharpen the mind."),
    Location::new(24, "Lotus Pond Town", "A canal town ringed with lotus ponds."),
    Location::new(25, "Black Pine Forest", "A dark forest where even woodcutters keep to the path."),
    Location::new(26, "Dragon Vein Cave", "A cave whose walls glitter with veins of quartz."),
    Location::new(27, "Moon Gate Pass", "A pass framed by a natural stone arch shaped like a full moon."),
    Location::new(28, "Autumn Maple Hill", "A hillside blazing red with maple leaves."),
    Location::new(29, "Old Tea House", "A tea house run by the same family for nine generations."),
    Location::new(30, "Riverside Market", "A floating market of sampans trading fish and silk."),
    Location::new(31, "Twin Dragon Bridge", "A double bridge whose railings are carved with coiling dragons."),
    Location::new(32, "Ancient Battlefield", "A plain still littered with rusted arrowheads."),
    Location::new(33, "Windswept Plateau", "A high plateau with nothing to break the wind."),
    Location::new(34, "Hermit's Hut", "A reed hut belonging to a hermit who is never at home."),
    Location::new(35, "Pearl River Wharf", "A wharf crowded with pearl divers and their buyers."),
    Location::new(36, "Drunken Immortal Tavern", "A tavern claiming an immortal once slept under its table."),
    Location::new(37, "Sword Tomb Valley", "A valley where fallen swordsmen's blades are planted in the earth."),
    Location::new(38, "Plum Blossom Manor", "A scholar's manor with a famous winter plum garden."),
    Location::new(39, "Echo Canyon", "A canyon that repeats every word seven times."),
    Location::new(40, "Silver Waterfall", "A tall ribbon of water that shines silver at dawn."),
    Location::new(41, "Bandit Stronghold", "A palisade on the hill flying a tattered black banner."),
    Location::new(42, "Whispering Reeds", "A marsh of reeds that rustle as if speaking."),
    Location::new(43, "Stone Forest", "A maze of limestone pillars taller than houses."),
    Location::new(44, "Ghost Lantern Village", "A village where lanterns are lit for the dead every night."),
    Location::new(45, "Cold Pool Hermitage", "A hermitage beside a pool that never thaws."),
    Location::new(46, "Purple Bamboo Court", "A walled courtyard of rare purple bamboo."),
    Location::new(47, "Salt Merchants' Camp", "A guarded camp of salt caravans waiting out the road."),
    Location::new(48, "Tiger Leap Gorge", "A gorge narrow enough that a tiger could leap across."),
    Location::new(49, "Green Lantern Pagoda", "A nine-storey pagoda with a green lamp burning at its top."),
    Location::new(50, "Rain Flower Terrace", "A terrace where petals fall like rain in spring."),
    Location::new(51, "Withered Wood Ridge", "A ridge of dead trees bleached white by lightning."),
    Location::new(52, "Floating Bridge", "A bridge of lashed boats that sways with the current."),
    Location::new(53, "Heron Marsh", "A marsh full of grey herons standing motionless."),
    Location::new(54, "Eagle Nest Cliff", "A cliff topped by a nest the size of a cart."),
    Location::new(55, "Ten Thousand Buddha Caves", "Caves whose walls are carved with countless small buddhas."),
    Location::new(56, "Cloud Sea Platform", "A stone platform above a sea of cloud."),
    Location::new(57, "Sunset Pavilion", "A pavilion built to watch the sun sink into the hills."),
    Location::new(58, "Lone Star Garrison", "A garrison of a dozen tired soldiers and one watchfire."),
    Location::new(59, "Broken Sword Cliff", "A cliff where a legendary duel shattered both blades."),
    Location::new(60, "Halfway Pagoda", "A squat pagoda said to stand exactly halfway to Yunmeng."),
    Location::new(61, "Peach Blossom Ferry", "A ferry crossing lined with peach trees."),
    Location::new(62, "Imperial Courier Station", "A relay station where couriers change horses."),
    Location::new(63, "Frost Peak", "A peak capped with frost even in summer."),
    Location::new(64, "Yellow Sand Crossing", "A stretch of drifting yellow sand between two rivers."),
    Location::new(65, "Nine-Bend Stream", "A stream that winds back on itself nine times."),
    Location::new(66, "Hidden Dragon Pool", "A deep pool where fishermen refuse to cast their nets."),
    Location::new(67, "Copper Bell Monastery", "A monastery whose copper bells ring without wind."),
    Location::new(68, "Mirror Lake", "A lake so still it doubles the mountains."),
    Location::new(69, "Rusted Spear Field", "A field where old spears stand in rows like wheat."),
    Location::new(70, "Crimson Cliff", "A cliff of red rock that glows at sunset."),
    Location::new(71, "Shattered Stele Forest", "A grove of broken steles bearing half-erased poems."),
    Location::new(72, "Bell Tower Town", "A market town ruled by the hours of its bell tower."),
    Location::new(73, "Serpent Path", "A path that coils around the hill like a snake."),
    Location::new(74, "Fragrant Hill", "A hill covered in wild osmanthus."),
    Location::new(75, "Nameless Grave Mound", "A grassy mound with no marker and no visitors."),
    Location::new(76, "Canal Lock Town", "A town built around a great wooden canal lock."),
    Location::new(77, "Falling Star Valley", "A valley with a crater where a star once fell."),
    Location::new(78, "Silk Road Inn", "A caravanserai full of foreign tongues and camels."),
    Location::new(79, "Thunder Gate", "A pass where thunder rolls even under clear skies."),
    Location::new(80, "Vulture Peak", "A peak circled day and night by vultures."),
    Location::new(81, "Reed Catkin Shore", "A shore white with drifting reed catkins."),
    Location::new(82, "Ironwood Stockade", "A stockade of ironwood logs guarding the river road."),
    Location::new(83, "Sleeping Buddha Hill", "A hill whose outline resembles a reclining buddha."),
    Location::new(84, "Smoke Rain Pavilion", "A pavilion by the lake, often lost in fine rain."),
    Location::new(85, "Deer Park", "A royal hunting park long abandoned to the deer."),
    Location::new(86, "Blood Oath Altar", "An altar where sworn brothers once mixed their blood."),
    Location::new(87, "Riverbend Orchard", "An orchard in the crook of a slow river."),
    Location::new(88, "Bronze Cauldron Hall", "A hall housing a bronze cauldron older than the dynasty."),
    Location::new(89, "Seven-Star Bridge", "A bridge of seven spans laid out like the Dipper."),
    Location::new(90, "Bamboo Raft Landing", "A landing where rafts are lashed for the journey downstream."),
    Location::new(91, "Dark Wind Cave", "A cave that breathes cold wind from deep below."),
    Location::new(92, "Camphor Tree Village", "A village gathered under one enormous camphor tree."),
    Location::new(93, "Frozen River", "A river whose surface freezes hard enough to walk on."),
    Location::new(94, "Golden Roof Temple", "A temple whose gilded roof can be seen for miles."),
    Location::new(95, "Poison Mist Swamp", "A swamp whose yellow mist sickens the unwary."),
    Location::new(96, "Kingfisher Isle", "A small isle flashing with kingfisher feathers."),
    Location::new(97, "Stone Gate Barrier", "A customs barrier cut through solid rock."),
    Location::new(98, "Flowing Cloud Gorge", "A gorge where clouds pour through like a river."),
    Location::new(99, "Hidden Arrow Ravine", "A ravine notorious for ambushes."),
    Location::new(100, "Lakeside Watchtower", "A watchtower overlooking the great lake."),
    Location::new(101, "Heavenly Pillar Peak", "A needle of rock rising straight into the clouds."),
    Location::new(102, "Rolling Thunder Rapids", "Rapids loud enough to drown out speech."),
    Location::new(103, "Dusk Bell Abbey", "An abbey whose evening bell carries across the water."),
    Location::new(104, "Fisherman's Shoal", "A shoal crowded with cormorant fishermen."),
    Location::new(105, "Wild Goose Marsh", "A marsh where wild geese nest in their thousands."),
    Location::new(106, "Ruined Palace", "The toppled pillars of a forgotten prince's palace."),
    Location::new(107, "Emerald Screen Cliffs", "Green cliffs that rise like a folding screen."),
    Location::new(108, "Mist-Veiled Ferry", "A ferry whose far bank is never visible."),
    Location::new(109, "Ancestral Shrine Village", "A village built around its clan's ancestral shrine."),
    Location::new(110, "Reed Maze", "A labyrinth of tall reeds where paths shift with the tide."),
    Location::new(111, "Dragon Scale Bridge", "A bridge paved with overlapping slate like dragon scales."),
    Location::new(112, "Stormwatch Tower", "A tower where signal fires warn of storms on the marsh."),
    Location::new(113, "Lotus Root Flats", "Mud flats where farmers dig for lotus root."),
    Location::new(114, "Last Inn Before the Marsh", "The final inn; beyond it there are no more roofs."),
    Location::new(115, "Sunken Temple", "A temple half-swallowed by the marsh."),
    Location::new(116, "Marsh Edge Causeway", "A raised causeway running into the reeds."),
    Location::new(117, "Floating Lantern Shoals", "Shoals where lanterns drift on the black water."),
    Location::new(118, "Heart of the Reeds", "Deep in the marsh, where the reeds close overhead."),
    Location::new(119, "Gate of Yunmeng", "Two great stone pillars standing alone in the water."),
    Location::new(120, "Yunmeng Marsh", "The goal: the marsh where the legendary blade Nilin awaits."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_indices_match_positions() {
        for (position, location) in LOCATIONS.iter().enumerate() {
            assert_eq!(usize::try_from(location.index).unwrap(), position);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = LOCATIONS.iter().map(|l| l.name).collect();
        assert_eq!(names.len(), LOCATION_COUNT);
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        assert_eq!(location_of(-15), location_of(0));
        assert_eq!(location_of(500), location_of(GOAL_PROGRESS));
        assert_eq!(location_of(i32::MIN).index, 0);
        assert_eq!(location_of(i32::MAX).index, GOAL_PROGRESS);
    }

    #[test]
    fn test_lookup_equals_lookup_of_clamped_progress() {
        for raw in -200_i64..=320 {
            let clamped = clamp_progress(raw);
            let direct = location_of(i32::try_from(raw).unwrap());
            assert_eq!(direct, location_of(clamped));
        }
    }

    #[test]
    fn test_lookup_is_monotonic() {
        let mut previous = location_of(START_PROGRESS).index;
        for progress in START_PROGRESS..=GOAL_PROGRESS {
            let index = location_of(progress).index;
            assert!(index >= previous);
            previous = index;
        }
    }

    #[test]
    fn test_termini() {
        assert!(location_of(0).is_terminus());
        assert!(location_of(120).is_terminus());
        assert!(!location_of(60).is_terminus());
    }
}
