//! Literal message pools.
//!
//! Placeholders are filled by [`super::messages::MessageContext::fill`]:
//! `{steps}`, `{steps_left}`, `{exercise}`, `{hours}`, `{quality}`,
//! `{sleep_more}`, `{sleep_gap_minutes}`, `{compliance}` and
//! `{compliance_gap}`.

use super::pillars::Pillar;

/// One pool entry. Conditional entries pick a template from the live metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
    Text(&'static str),
    /// `with` when a sleep quality reading exists.
    WithQuality {
        with: &'static str,
        without: &'static str,
    },
    /// `low` when sleep quality exists and is below 70%.
    LowQuality {
        low: &'static str,
        otherwise: &'static str,
    },
    /// `above` when meal compliance is strictly above `threshold`.
    ComplianceAbove {
        threshold: f64,
        above: &'static str,
        otherwise: &'static str,
    },
}

/// Celebration lines for movement.
pub static HIGH_MOVEMENT: &[Line] = &[
    Line::Text("{steps} steps! You're absolutely crushing it! 💪"),
    Line::Text("{exercise} minutes of exercise? That's what champions are made of! 🏆"),
    Line::Text("With {steps} steps today, you're basically unstoppable! 🚀"),
    Line::Text("{exercise} active minutes! Your body is doing a happy dance! 💃"),
    Line::Text("Wow! {steps} steps means you're walking the walk! 👟"),
    Line::Text("{exercise} minutes of movement magic! Keep it up! ✨"),
    Line::Text("Your {steps} steps are putting you in beast mode! 🦁"),
    Line::Text("{exercise} active minutes! Fitness level: Superhero! 🦸"),
    Line::Text("Those {steps} steps won't count themselves - oh wait, they did! 📱"),
    Line::Text("{exercise} minutes proves you're committed to excellence! 🌟"),
    Line::Text("{steps} steps! Your sneakers deserve a medal! 🥇"),
    Line::Text("Crushing {exercise} active minutes like a pro! 💥"),
    Line::Text("{steps} steps = pure dedication! Love it! ❤️"),
    Line::Text("{exercise} minutes of activity! You're rewriting the rules! 📝"),
    Line::Text("With {steps} steps, you're basically a movement legend! 🎯"),
    Line::Text("{exercise} active minutes! Your fitness game is unmatched! 🔥"),
    Line::Text("{steps} steps! Your couch called - it misses you! 🛋️"),
    Line::Text("{exercise} minutes of pure awesome! Keep slaying! 👑"),
    Line::Text("Your {steps} steps are making other trackers jealous! 📊"),
    Line::Text("{exercise} active minutes! That's the energy we love to see! ⚡"),
];

/// Celebration lines for sleep.
pub static HIGH_SLEEP: &[Line] = &[
    Line::Text("{hours} hours of sleep! You're a rest champion! 😴"),
    Line::Text("Sleeping {hours} hours - your body is thanking you! 🛌"),
    Line::Text("{hours} hours! That's the sweet spot for recovery! 💤"),
    Line::WithQuality {
        with: "{hours}h with {quality}% quality - sleep mastery! ⭐",
        without: "{hours} hours - you're crushing the sleep game! ✨",
    },
    Line::Text("{hours} hours of pure rest! Keep it up! 🌙"),
    Line::WithQuality {
        with: "Quality at {quality}% and {hours}h duration - perfection! 🏆",
        without: "{hours} hours - your pillow is doing a happy dance! 🎵",
    },
    Line::Text("{hours} hours! Your circadian rhythm is on point! ⌚"),
    Line::Text("Logging {hours} hours nightly - that's consistency! 📊"),
    Line::WithQuality {
        with: "{quality}% quality sleep - absolutely legendary! 🌟",
        without: "{hours} hours - sleep excellence achieved! 🥇",
    },
    Line::Text("{hours} hours means you're prioritizing recovery! 💪"),
    Line::Text("{hours} hours! Your body's repair shop is working overtime! 🔧"),
    Line::WithQuality {
        with: "{hours}h + {quality}% quality = wellness gold! 💛",
        without: "{hours} hours - dreams approved! 💭",
    },
    Line::Text("{hours} hours of shuteye! Sleep goals achieved! 🎯"),
    Line::Text("{hours} hours! That's what champions are made of! 🏅"),
    Line::WithQuality {
        with: "Sleep quality: {quality}%. Duration: {hours}h. Both crushing! 🚀",
        without: "{hours} hours - you're sleeping like a pro! 😴",
    },
    Line::Text("{hours} hours! Your wellness journey loves this! ❤️"),
    Line::Text("Nailing {hours} hours - rest royalty right here! 👑"),
    Line::WithQuality {
        with: "{quality}% quality! Your sleep game is unmatched! 🔥",
        without: "{hours} hours - the sandman approves! ⭐",
    },
    Line::Text("{hours} hours nightly! Consistency is key! 🔑"),
    Line::Text("{hours} hours! Your body is sending thank-you notes! 💌"),
];

/// Celebration lines for mindfulness.
pub static HIGH_MINDFULNESS: &[Line] = &[
    Line::Text("Zen master in training! Your inner peace is showing. 🧘"),
    Line::Text("Your mindfulness is on point – even your stress is stressed out! 🌟"),
    Line::Text("Calm, cool, and collected. Buddha would be proud! ☮️"),
    Line::Text("Your mind is so clear, it probably has a window cleaning service! 🧠"),
    Line::Text("Mental clarity champion! Your focus is legendary! 🎯"),
    Line::Text("Your mindfulness game is making meditation apps jealous! 📱"),
    Line::Text("Inner peace level: OFF THE CHARTS! Amazing! 📊"),
    Line::Text("Your mental wellness is basically a work of art! 🎨"),
    Line::Text("Stress management expert alert! You're crushing it! 🚨"),
    Line::Text("Your calm energy could power a wellness retreat! ⚡"),
    Line::Text("Mindfulness mastery achieved! Give yourself credit! 🏆"),
    Line::Text("Your mental health practice is inspiring! Keep it up! ✨"),
    Line::Text("Serenity now, serenity always! You've got this down! 🌊"),
    Line::Text("Your meditation stats are basically perfect! 💯"),
    Line::Text("Inner harmony on full display! Outstanding work! 🎵"),
    Line::Text("Your mindfulness consistency is breaking records! 📈"),
    Line::Text("Mental wellness warrior right here! Bravo! ⚔️"),
    Line::Text("Your stress levels are so low, they're practically napping! 😴"),
    Line::Text("Mindfulness influencer in the making! Incredible! 🌟"),
    Line::Text("Your mental clarity could cut glass! Sharp focus! 💎"),
    Line::Text("Zen achievement unlocked! You're on another level! 🔓"),
    Line::Text("Your mindfulness practice is basically meditation goals! 🧘‍♀️"),
    Line::Text("Peace, love, and perfect mental balance! You've got it! ☮️"),
    Line::Text("Your calm is contagious! Wellness approved! 💚"),
    Line::Text("Mental health champion status: CONFIRMED! 🏅"),
    Line::Text("Your mindfulness metrics deserve applause! 👏"),
    Line::Text("Inner peace ambassador right here! Amazing! 🌍"),
    Line::Text("Your meditation game is stronger than coffee! ☕"),
    Line::Text("Stress? Your mindfulness practice laughs at it! 😄"),
    Line::Text("Your mental wellness journey is a masterpiece! 🖼️"),
    Line::Text("Calm commander in action! Impressive work! 🎖️"),
    Line::Text("Your mindfulness consistency is goal-worthy! 🎯"),
    Line::Text("Mental clarity level: CRYSTAL CLEAR! 💎"),
    Line::Text("Your zen mode is permanently activated! Love it! 🌸"),
    Line::Text("Mindfulness expert status: ACHIEVED! 🎓"),
    Line::Text("Your inner peace is radiating outward! Brilliant! ☀️"),
    Line::Text("Mental wellness on point! You're setting standards! 📏"),
    Line::Text("Your calm could teach a masterclass! 🎙️"),
    Line::Text("Stress management: You're basically a professional! 💼"),
    Line::Text("Your mindfulness is making therapists proud! 🏥"),
    Line::Text("Inner balance achieved! Supreme effort! ⚖️"),
    Line::Text("Your mental health game is phenomenal! 🌟"),
    Line::Text("Mindfulness metrics: ALL GREEN! Outstanding! 🟢"),
    Line::Text("Your zen level could power a meditation center! 🏛️"),
    Line::Text("Mental wellness champion alert! You're it! 🚨"),
    Line::Text("Your inner peace is basically a superpower! 🦸"),
    Line::Text("Calm, centered, and crushing it! That's you! 💪"),
    Line::Text("Your mindfulness practice is hall-of-fame worthy! 🏆"),
    Line::Text("Mental clarity this good is pure excellence! ⭐"),
    Line::Text("Your stress levels are so managed, they filed for retirement! 📝"),
];

/// Celebration lines for nutrition.
pub static HIGH_NUTRITION: &[Line] = &[
    Line::Text("{compliance}% meal plan compliance! You're crushing it! 🥗"),
    Line::Text("{compliance}% on track! Your nutrition game is strong! 💪"),
    Line::Text("Wow! {compliance}% compliance - that's dedication! 🏆"),
    Line::Text("{compliance}% following your plan! Nutrition excellence! ⭐"),
    Line::Text("{compliance}% meal plan success! Your body is celebrating! 🎉"),
    Line::Text("Hitting {compliance}% - you're a nutrition champion! 👑"),
    Line::Text("{compliance}% compliance! That's what we call commitment! 💯"),
    Line::Text("{compliance}% on point! Your cells are doing the happy dance! 💃"),
    Line::Text("{compliance}% meal plan adherence! Outstanding work! 🌟"),
    Line::Text("{compliance}%! Fueling your body like a pro! 🚀"),
    Line::Text("{compliance}% compliance - nutrition mastery achieved! 🎯"),
    Line::Text("{compliance}% on track! Your fork deserves a medal! 🥇"),
    Line::Text("Nailing {compliance}% - healthy eating champion! 🏅"),
    Line::Text("{compliance}% success! Your wellness journey loves this! ❤️"),
    Line::Text("{compliance}% meal compliance! Absolutely phenomenal! ✨"),
    Line::Text("{compliance}% on target! You're making it look easy! 😎"),
    Line::Text("{compliance}% plan adherence! Nutrition goals = crushed! 💥"),
    Line::Text("{compliance}%! Your body is sending thank-you notes! 💌"),
    Line::Text("{compliance}% compliance! That's gold standard eating! 🌟"),
    Line::Text("Achieving {compliance}% - you're rewriting the rules! 📝"),
];

/// Encouragement lines for movement.
pub static MODERATE_MOVEMENT: &[Line] = &[
    Line::Text("{steps} steps is a start! Let's aim higher tomorrow! 💚"),
    Line::Text("{exercise} active minutes - you can do more! Your body is ready! 💪"),
    Line::Text("{steps} steps today. How about adding 1,000 more? 🎯"),
    Line::Text("{exercise} minutes of movement. Let's push for 30! 🚀"),
    Line::Text("You've got {steps} steps - the 10K goal is within reach! 🏃"),
    Line::Text("{exercise} active minutes is good, but you're capable of more! ⭐"),
    Line::Text("{steps} steps logged! Your next goal: beat this tomorrow! 📈"),
    Line::Text("{exercise} minutes counts! Let's build on that momentum! 🌟"),
    Line::Text("{steps} steps - you're {steps_left} away from 10K! 🎯"),
    Line::Text("{exercise} active minutes! What if you added just 10 more? 🤔"),
    Line::Text("{steps} steps is progress! Keep that momentum going! 💥"),
    Line::Text("{exercise} minutes of exercise - let's make tomorrow even better! 🌟"),
    Line::Text("You hit {steps} steps! Your muscles want more! 🦵"),
    Line::Text("{exercise} active minutes! Small increases = big results! 💪"),
    Line::Text("{steps} steps today - tomorrow's a new opportunity! 🌅"),
    Line::Text("{exercise} minutes! Your heart would love some more cardio! ❤️"),
    Line::Text("{steps} steps - you're on the path! Let's walk it! 🚶"),
    Line::Text("{exercise} active minutes - consistency will get you there! 🔑"),
    Line::Text("You've walked {steps} steps! Ready for a challenge? 🏆"),
    Line::Text("{exercise} minutes is something! Let's make it everything! ✨"),
];

/// Encouragement lines for sleep.
pub static MODERATE_SLEEP: &[Line] = &[
    Line::Text("{hours} hours isn't quite enough - let's aim for 7-9! 😴"),
    Line::Text("You're at {hours}h - just a bit more for optimal rest! 🛌"),
    Line::Text("{hours} hours of sleep. Your body wants {sleep_more}! 💤"),
    Line::LowQuality {
        low: "Sleep quality at {quality}% - let's improve that routine! ⭐",
        otherwise: "{hours}h logged - time to prioritize more ZZZs! 🌙",
    },
    Line::Text("{hours} hours - you're close to the sweet spot! Keep going! ✨"),
    Line::Text("Getting {hours}h - let's push for that 7-9 hour range! 🎯"),
    Line::WithQuality {
        with: "{hours}h with {quality}% quality - both need a boost! 💪",
        without: "{hours} hours - your pillow is waiting for more time! 🛌",
    },
    Line::Text("You're sleeping {hours}h - almost there! Consistency is key! 🔑"),
    Line::Text("{hours} hours logged - your body is craving more! 💚"),
    Line::Text("{hours}h - better sleep = better you! Let's commit! 🌟"),
    Line::LowQuality {
        low: "Quality: {quality}%. Let's work on that sleep hygiene! 🌙",
        otherwise: "{hours} hours - time to make sleep a priority! ❤️",
    },
    Line::Text("At {hours}h, you're {sleep_gap_minutes} minutes from optimal! ⏰"),
    Line::Text("{hours} hours - your recovery mode needs more time! 🔧"),
    Line::Text("{hours}h of sleep - let's level up that rest game! 🎮"),
    Line::WithQuality {
        with: "{hours}h duration, {quality}% quality - room for improvement! 📈",
        without: "{hours} hours - small changes, big impact! 💥",
    },
    Line::Text("You got {hours}h - your future self wants more! 🚀"),
    Line::Text("{hours} hours sleep - consistency will get you there! 🏆"),
    Line::Text("{hours}h logged - let's build a better sleep routine! 🏛️"),
    Line::Text("Sleeping {hours}h - your wellness journey needs more rest! 🌱"),
    Line::Text("{hours} hours - quality sleep is an investment in YOU! 💰"),
];

/// Encouragement lines for mindfulness.
pub static MODERATE_MINDFULNESS: &[Line] = &[
    Line::Text("Time to take a breather – your mind deserves a spa day! 🧘"),
    Line::Text("A few minutes of mindfulness can go a long way! 🌟"),
    Line::Text("Your stress could use a timeout. Let's meditate on that! ☮️"),
    Line::Text("Mental wellness check-in: it's time to tune in! 🧠"),
    Line::Text("Your mind is ready for some peace and quiet! Give it space. 🌸"),
    Line::Text("Mindfulness moment needed! Your mental health matters. 💚"),
    Line::Text("Stress management alert! Time to breathe and reset. 😮‍💨"),
    Line::Text("Your inner peace is calling! Will you answer? 📞"),
    Line::Text("Mental clarity opportunity detected! Meditation awaits. 🎯"),
    Line::Text("Your mind could use a vacation! Even 5 minutes helps. ⏰"),
    Line::Text("Calm mode activation needed! You've got this. 🌊"),
    Line::Text("Your mental wellness deserves attention! Give it some. 👀"),
    Line::Text("Mindfulness boost available! Just add breath. 💨"),
    Line::Text("Your stress levels need managing! Let's start today. 📊"),
    Line::Text("Mental health matters! Time for some self-care. 💝"),
    Line::Text("Your mind is ready to find its center! Help it out. 🎯"),
    Line::Text("Meditation opportunity! Your inner peace is waiting. 🧘‍♀️"),
    Line::Text("Time to trade chaos for calm! You deserve it. ✨"),
    Line::Text("Your mental wellness meter needs a refill! 🔋"),
    Line::Text("Mindfulness mission: Make space for peace today! ☮️"),
    Line::Text("Your stress wants a vacation! Give it one. 🏝️"),
    Line::Text("Mental clarity calling! Time to tune in and chill out. 📻"),
    Line::Text("Your mind deserves a break! Mindfulness to the rescue. 🦸"),
    Line::Text("Calm commander mode needed! Activate peace protocol. 🎖️"),
    Line::Text("Your mental health goals need daily practice! Start small. 🌱"),
    Line::Text("Mindfulness moment available! Claim it now. ⏰"),
    Line::Text("Your inner zen is buried under stress! Let's dig it out. ⛏️"),
    Line::Text("Mental wellness opportunity! Your future self will thank you. 🙏"),
    Line::Text("Time to show your mind some TLC! It works hard for you. 💪"),
    Line::Text("Your stress management game needs leveling up! 🎮"),
    Line::Text("Meditation calling! Even a minute makes a difference. 📞"),
    Line::Text("Your mental clarity is cloudy! Let's clear the skies. ☁️➡️☀️"),
    Line::Text("Mindfulness investment = peace dividend! Start depositing. 💰"),
    Line::Text("Your calm is in there somewhere! Let's find it together. 🔍"),
    Line::Text("Mental health check-in time! How's your inner peace? 💭"),
    Line::Text("Your mind needs a reset! Breathe and reboot. 🔄"),
    Line::Text("Stress timeout needed! Your wellness demands it. ⏸️"),
    Line::Text("Mindfulness muscles need exercising! Let's flex them. 💪"),
    Line::Text("Your mental wellness portfolio needs attention! 📈"),
    Line::Text("Inner peace opportunity detected! Seize it. 🎯"),
    Line::Text("Time to trade tension for tranquility! You can do this. 🌊"),
    Line::Text("Your mind is ready for some calm cultivation! 🌱"),
    Line::Text("Meditation motivation needed! Your mental health is worth it. 💎"),
    Line::Text("Stress management starts with mindfulness! Let's begin. 🏁"),
    Line::Text("Your inner calm is hiding! Let's coax it out. 🐚"),
    Line::Text("Mental wellness calling! Time to answer and engage. 📞"),
    Line::Text("Mindfulness moment missed? There's always now! ⏰"),
    Line::Text("Your peace potential is unlimited! Let's unlock it. 🔓"),
    Line::Text("Calm creation opportunity! Your mind is ready. 🎨"),
    Line::Text("Mental health investment time! Future you is cheering! 📣"),
];

/// Encouragement lines for nutrition.
pub static MODERATE_NUTRITION: &[Line] = &[
    Line::Text("{compliance}% meal plan compliance - let's push to 80%+! 🥗"),
    Line::Text("You're at {compliance}% - your body wants better fuel! 🍎"),
    Line::Text("{compliance}% on track - small changes = big results! 🌱"),
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "{compliance}% compliance. You're {compliance_gap}% away from perfect! 🎯",
        otherwise: "Time to start tracking those meals - your body will thank you! 🎯",
    },
    Line::Text("{compliance}% - your nutrition game needs leveling up! 🎮"),
    Line::Text("At {compliance}%, there's room to grow! Let's fuel right! 🥦"),
    Line::Text("{compliance}% meal plan - consistency is the key! 🔑"),
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "You're {compliance}% there - let's boost that nutrition! 🚀",
        otherwise: "Start tracking your meals - every journey begins somewhere! 🚀",
    },
    Line::Text("{compliance}% compliance - your cells want more nutrients! 💥"),
    Line::Text("{compliance}% on plan - time to prioritize healthy eating! ⭐"),
    Line::ComplianceAbove {
        threshold: 20.0,
        above: "{compliance}% - you can do this! Your body believes in you! 💪",
        otherwise: "Your body is ready for better nutrition! Let's start tracking! 💪",
    },
    Line::Text("{compliance}% today - let's make tomorrow's meals count! 🍽️"),
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "{compliance}% meal plan - small improvements add up! 📈",
        otherwise: "Every meal is a chance to fuel your body right! Start tracking! 📈",
    },
    Line::ComplianceAbove {
        threshold: 20.0,
        above: "You're hitting {compliance}% - aim higher, you've got this! 🌟",
        otherwise: "Time to start logging those meals - you've got this! 🌟",
    },
    Line::Text("{compliance}% compliance - your health is worth the effort! 💚"),
    Line::Text("{compliance}% on track - let's build better habits! 🏛️"),
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "At {compliance}%, keep building momentum! 🏃",
        otherwise: "Ready to start your nutrition journey? First meal: track it! 🏃",
    },
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "{compliance}% meal adherence - your future self will thank you! 🙏",
        otherwise: "Your future self will thank you for starting to track! 🙏",
    },
    Line::Text("{compliance}% - nutrition is an investment in YOU! 💰"),
    Line::ComplianceAbove {
        threshold: 0.0,
        above: "You've hit {compliance}% - let's fuel that body right! ⚡",
        otherwise: "Let's start fueling that body right - track your first meal! ⚡",
    },
];

/// Start-tracking lines, used below the moderate tier. No placeholders.
pub static LOW_TRACKING: &[Line] = &[
    Line::Text("It's like a desert out there – might be time to start tracking! 🌵"),
    Line::Text("Your wellness journey is waiting to begin! Let's get some data flowing. 📊"),
    Line::Text("Time to turn on those tracking tools – your future self will thank you! 🚀"),
    Line::Text("Ready to start your wellness adventure? First step: track it! 🎯"),
    Line::Text("Your body has a story to tell – let's start listening! 📱"),
    Line::Text("Even the longest journey starts with tracking the first step! 🗺️"),
    Line::Text("Data detective mode needed! Your health mysteries await solving. 🔍"),
    Line::Text("Your wellness journey needs a starting line! Let's draw one. 🏁"),
    Line::Text("Tracking time! Your future healthy self is rooting for you! 📣"),
    Line::Text("Let's turn data into action! First, we need the data. 💾"),
    Line::Text("Your health journey starts with awareness! Track and learn. 🧠"),
    Line::Text("Wellness waiting! Time to start gathering your health intel. 🕵️"),
    Line::Text("Every expert started as a beginner! Let's begin tracking. 🌱"),
    Line::Text("Your body is full of insights! Let's start collecting them. 💡"),
    Line::Text("Data darkness detected! Time to flip on the tracking lights. 💡"),
    Line::Text("Your wellness potential is unlimited! Step one: start tracking. 🚀"),
    Line::Text("Health journey activation needed! Begin with data collection. ⚡"),
    Line::Text("Your body's been keeping secrets! Tracking reveals all. 🤐➡️📱"),
    Line::Text("Wellness wisdom starts with data! Let's get some flowing. 🌊"),
    Line::Text("Your health story is unwritten! Let's start the first chapter. 📖"),
    Line::Text("Tracking transforms! Ready to see your wellness evolve? 🦋"),
    Line::Text("Data is power! Let's power up your health journey. 🔋"),
    Line::Text("Your wellness GPS needs activation! Turn on tracking. 🗺️"),
    Line::Text("Health insights await! Just add consistent tracking. 💎"),
    Line::Text("Your body is a wonderland! Let's start exploring with data. 🎢"),
    Line::Text("Wellness revolution begins with one tracked metric! 🎯"),
    Line::Text("Your health journey deserves documentation! Start today. 📝"),
    Line::Text("Data drives change! Let's start collecting and evolving. 🚗"),
    Line::Text("Your wellness potential is waiting! Unlock it with tracking. 🔓"),
    Line::Text("Health awareness begins now! Activate those tracking tools. ⏰"),
    Line::Text("Your body's performance metrics need attention! Let's look. 👀"),
    Line::Text("Wellness journey loading... Please start tracking! ⏳"),
    Line::Text("Your health transformation starts with measurement! Begin! 📏"),
    Line::Text("Data collection = self-care! Show yourself some love. 💚"),
    Line::Text("Your wellness roadmap needs data points! Let's add some. 🗺️"),
    Line::Text("Health journey kickoff! First play: start tracking. 🏈"),
    Line::Text("Your body is ready to share its stats! Listen up! 👂"),
    Line::Text("Wellness wisdom through data! Let's start gathering. 🧙"),
    Line::Text("Your health metrics are hiding! Tracking finds them. 🔦"),
    Line::Text("Data-driven wellness awaits! Press start on tracking. ▶️"),
    Line::Text("Your journey to better health needs a GPS! Tracking is it. 📍"),
    Line::Text("Health insights are earned through tracking! Let's earn some. 💪"),
    Line::Text("Your wellness story needs a beginning! Chapter 1: Track. 📚"),
    Line::Text("Data is your health compass! Time to start navigating. 🧭"),
    Line::Text("Your body wants to communicate! Tracking is the language. 🗣️"),
    Line::Text("Wellness transformation waiting! Required: data collection. ⏰"),
    Line::Text("Your health potential is enormous! Step 1: start tracking. 🌟"),
    Line::Text("Data collection is self-discovery! Begin the journey. 🔍"),
    Line::Text("Your wellness evolution starts with tracking! Ready? Set? Go! 🏁"),
    Line::Text("Health awareness activation needed! Turn on those trackers. 🎚️"),
    Line::Text("Your body is an amazing machine! Let's start the diagnostics. 🔧"),
];

pub const HIGH_FALLBACK: &str = "You're crushing it! Keep up the amazing work! 🌟";
pub const MODERATE_FALLBACK: &str =
    "You're on the right track! Small steps lead to big changes. 🌟";

/// Returned instead of a score message when no signal has any reading.
pub const NO_DATA_MESSAGE: &str = "We don't have any tracking data yet! Connect your wearable device or start logging your activities to see your wellness score. 📱";

pub fn celebration(pillar: Pillar) -> &'static [Line] {
    match pillar {
        Pillar::Movement => HIGH_MOVEMENT,
        Pillar::Sleep => HIGH_SLEEP,
        Pillar::Mindfulness => HIGH_MINDFULNESS,
        Pillar::Nutrition => HIGH_NUTRITION,
    }
}

pub fn encouragement(pillar: Pillar) -> &'static [Line] {
    match pillar {
        Pillar::Movement => MODERATE_MOVEMENT,
        Pillar::Sleep => MODERATE_SLEEP,
        Pillar::Mindfulness => MODERATE_MINDFULNESS,
        Pillar::Nutrition => MODERATE_NUTRITION,
    }
}
