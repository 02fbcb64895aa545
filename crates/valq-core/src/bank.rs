use crate::types::Question;

/// One pre-authored catalog entry. Ids are assigned at selection time, so the
/// catalog stores only the text fields.
#[derive(Clone, Copy, Debug)]
pub struct BankEntry {
    pub prompt: &'static str,
    pub a: &'static str,
    pub b: &'static str,
}

impl BankEntry {
    pub fn to_question(&self) -> Question {
        Question {
            id: String::new(),
            prompt: self.prompt.to_string(),
            a: self.a.to_string(),
            b: self.b.to_string(),
        }
    }
}

/// Fixed, ordered catalog of fallback questions.
///
/// Author invariants, checked by tests rather than at runtime: every field is
/// already normalized and within the sanitizer's length bounds, no field
/// touches a disallowed topic, prompts are unique, and the catalog is at
/// least as large as the biggest allowed request so fallback selection can
/// always fill a full set.
pub const QUESTION_BANK: &[BankEntry] = &[
    BankEntry {
        prompt: "During rides, you prefer:",
        a: "A calm, quiet ride where we can relax with little to no conversation.",
        b: "A friendly ride with light conversation to make the trip feel social and welcoming.",
    },
    BankEntry {
        prompt: "Pickup timing matters most when it is:",
        a: "Right on schedule, so I can plan my day confidently around exact pickup times.",
        b: "Flexible within a few minutes, as long as updates are shared clearly and early.",
    },
    BankEntry {
        prompt: "For route planning you value:",
        a: "The fastest route overall, even if it changes day to day based on traffic.",
        b: "A consistent, predictable route that helps me avoid uncertainty and stress.",
    },
    BankEntry {
        prompt: "In shared rides you prioritize:",
        a: "Keeping trips affordable, even if that means minor detours or a slightly longer ride.",
        b: "Higher comfort, with fewer detours and a smoother, more direct ride experience.",
    },
    BankEntry {
        prompt: "When plans change, you prefer:",
        a: "Immediate real-time updates so I can quickly adapt and make new plans.",
        b: "One clear summary update before pickup with all key changes in one place.",
    },
    BankEntry {
        prompt: "Driver behavior you value more:",
        a: "Smooth, steady driving that feels safe and comfortable throughout the trip.",
        b: "Fast and efficient driving that helps us arrive as quickly as possible.",
    },
    BankEntry {
        prompt: "For recurring trips, you'd rather:",
        a: "Ride with familiar people to build trust and predictable ride habits over time.",
        b: "Ride with whoever is available if it improves convenience and flexibility.",
    },
    BankEntry {
        prompt: "You care most about:",
        a: "Reducing environmental impact through efficient shared rides and fewer vehicles.",
        b: "Reducing travel uncertainty with dependable timing and clear expectations.",
    },
    BankEntry {
        prompt: "At pickup points, you prefer:",
        a: "The closest pickup location, even if it is slightly less visible to others.",
        b: "A safer, well-lit, and clearly visible pickup location, even if it is farther.",
    },
    BankEntry {
        prompt: "You feel best matched with riders who are:",
        a: "Highly punctual and reliable about arriving exactly when they say they will.",
        b: "Easygoing and adaptable when small delays or changes happen.",
    },
    BankEntry {
        prompt: "For wait time tolerance, you prefer:",
        a: "No waiting at pickup, so rides start exactly at the planned time.",
        b: "A short wait of up to five minutes, if communication stays clear and respectful.",
    },
    BankEntry {
        prompt: "For communication style, you prefer:",
        a: "Brief and direct updates that focus only on what is essential.",
        b: "Warm, conversational notes that feel personal and friendly.",
    },
    BankEntry {
        prompt: "Inside the car, you feel best when:",
        a: "The temperature and airflow stay exactly how the group agreed at the start.",
        b: "Everyone adjusts things freely as the ride goes on, even if it varies a lot.",
    },
    BankEntry {
        prompt: "On early morning rides, you would rather:",
        a: "Keep the ride silent so everyone can ease into the day at their own pace.",
        b: "Share a bit of energy and small talk to start the day on a warm note.",
    },
    BankEntry {
        prompt: "When a rider is running late, you prefer to:",
        a: "Leave on time anyway so the rest of the group keeps its schedule.",
        b: "Wait a few extra minutes so nobody gets left behind on a rough morning.",
    },
    BankEntry {
        prompt: "For music during shared rides, you value:",
        a: "A quiet cabin or soft background sound that nobody has to think about.",
        b: "Taking turns picking songs so everyone gets a say in the mood.",
    },
    BankEntry {
        prompt: "When choosing a regular carpool group, you prefer:",
        a: "A small, fixed circle of people you get to know well over many trips.",
        b: "A wider rotating mix of people that keeps every trip a little different.",
    },
    BankEntry {
        prompt: "If the driver takes an unfamiliar shortcut, you feel:",
        a: "Uneasy, since I value knowing exactly where we are going and when.",
        b: "Fine with it, since I trust the driver to use their judgment on the road.",
    },
    BankEntry {
        prompt: "With luggage and personal space, you prefer:",
        a: "Clear limits agreed in advance so everyone knows how much room they have.",
        b: "A relaxed approach where people squeeze in and make it work together.",
    },
    BankEntry {
        prompt: "When the weather turns bad, you would rather:",
        a: "Leave earlier and drive slowly, putting safety ahead of the planned arrival.",
        b: "Keep the usual plan and trust careful driving to stay on schedule.",
    },
    BankEntry {
        prompt: "For trip planning, you feel better when:",
        a: "Every ride for the week is arranged ahead and locked in early.",
        b: "Rides come together a day or two before, leaving room to adjust.",
    },
    BankEntry {
        prompt: "If two routes take the same time, you pick:",
        a: "The highway, since steady speeds feel efficient and predictable to me.",
        b: "Local streets, since varied scenery makes the ride feel shorter.",
    },
    BankEntry {
        prompt: "When someone new joins the carpool, you prefer:",
        a: "A short introduction round first, so the group feels familiar quickly.",
        b: "Letting things warm up naturally over the first few shared rides.",
    },
    BankEntry {
        prompt: "After a tiring day, the ride home should be:",
        a: "Restful and quiet, a buffer between work and home life.",
        b: "Lively and social, a chance to unwind by talking it out.",
    },
];
