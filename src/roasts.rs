use crate::scoring::AgeBucket;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub type Lines = &'static [&'static str];

// Fixed one-liners appended by rule rather than picked at random
pub const NO_HTTPS_ROAST: &str = "No HTTPS? Are we in 2010? 📅";
pub const NO_HTTPS_SUGGESTION: &str = "Enable HTTPS with a free SSL cert (Let's Encrypt!)";
pub const HTTPS_COMPLIMENT: &str = "HTTPS locked and loaded! 🔒";
pub const WWW_ROAST: &str = "Still using www? How retro! 📻";
pub const WWW_SUGGESTION: &str = "Redirect www to non-www (or vice versa) for consistency";
pub const NEW_DOMAIN_ROAST: &str = "So new, Google hasn't even noticed you yet! 🕵️";
pub const EXPIRING_ROAST: &str = "Expiring soon? Better renew before someone snipes it! 😱";
pub const EXPIRING_SUGGESTION: &str = "Renew now — don't lose your domain!";
pub const LOW_SCORE_ROAST: &str = "This domain needs a serious glow-up! 🆘";
pub const ELITE_SCORE_COMPLIMENT: &str = "Elite domain status achieved! 🏆";
pub const SOLID_SCORE_COMPLIMENT: &str = "Solid domain choices all around! ✅";

pub const GENERAL_SUGGESTIONS: [&str; 3] = [
    "Set up email forwarding (e.g., hello@ → Gmail)",
    "Enable WHOIS privacy if it's not already on",
    "Use a modern DNS provider for speed and security",
];

// Lookup-failure report
pub const FALLBACK_REGISTRAR: &str = "Mystery Registrar";
pub const FALLBACK_ROASTS: [&str; 3] = [
    "WHOIS lookup failed... hiding something? 🕵️",
    "Even the internet doesn't know you exist! 👻",
    "Analysis failed harder than a 500 error! 💥",
];
pub const FALLBACK_COMPLIMENTS: [&str; 1] = ["At least you have a domain! 🎉"];
pub const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "Make sure your domain has public WHOIS data",
    "Try again later — servers might be napping 😴",
];

/// Roasts for an unknown TLD; `{tld}` is replaced with the dot-prefixed TLD.
pub const GENERIC_TLD_ROASTS: [&str; 4] = [
    "{tld}? Trying to be unique? 🤨",
    "{tld}? That's... creative! 😅",
    ".{tld} – never seen that before! 🫢",
    "{tld}? Are you from the future? 🚀",
];

/// Roasts for an unrecognised registrar; `{registrar}` is replaced with its name.
pub const GENERIC_REGISTRAR_ROASTS: [&str; 4] = [
    "Never heard of {registrar}... sketchy? 👀",
    "{registrar}? Sounds made up! 🤥",
    "Using {registrar}? Bold move in 2026! 😅",
    "{registrar}? That's a new one on me! 🫢",
];

pub static TLD_ROASTS: Lazy<HashMap<&'static str, Lines>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Lines> = HashMap::new();

    map.insert(".com", &[
        "Basic like pumpkin spice latte 🎃",
        "Couldn't afford .io? 💸",
        "The plain white t-shirt of domains 👕",
        "Still the king, bow down peasants 👑",
        "Grandpa's favorite TLD since 1995 🦕",
        "Safe choice for people who fear change 😴",
    ]);
    map.insert(".io", &[
        "Tech bro detected! 🚀",
        "Found the startup founder! 💼",
        "So 2020s tech startup 🌟",
        "Input/Output or just pretending to be cool? 🔌",
        "Every SaaS landing page's best friend 🖥️",
        "British Indian Ocean Territory thanks you for the rent 🇮🇴",
        "When .com was taken by a squatter 😤",
    ]);
    map.insert(".org", &[
        "Trying to look non-profit? 🕊️",
        "Wikipedia called, wants its TLD back 📚",
        "Trust me, we're totally legitimate 🤝",
        "For when you want that wholesome vibe ✨",
        "Open-source project energy ⚡",
        "Actual charities only, please 🙏",
    ]);
    map.insert(".net", &[
        "Couldn't get the .com, huh? 😅",
        "The participation trophy of domains 🏆",
        "Internet but make it 1999 🌐",
        "Network administrator's nostalgic pick 📡",
        "Second-choice energy forever 🥈",
        "At least it's not .biz... right? 😬",
    ]);
    map.insert(".dev", &[
        "Okay developer, we get it 👨‍💻",
        "Google wants their $12/year back 💰",
        "GitHub Pages wasn't flexy enough? 🐙",
        "Portfolio site incoming 📂",
        "Forced to use HTTPS like a responsible adult 🔒",
        "Look at me, I code! 💻",
    ]);
    map.insert(".ai", &[
        "Jumping on the AI hype train 🤖",
        "So hot right now 🔥",
        "ChatGPT wrapper detected 🕵️",
        "Valued at $10B pre-revenue, obviously 🚀",
        "Every new startup in 2024–2026 📈",
        "Anguilla's economy thanks you 🇦🇮",
        "Not actually intelligent, just trendy 😏",
    ]);
    map.insert(".co", &[
        ".com's cheaper cousin 🛒",
        "Colombia or company? 🤔",
        "Short and sweet, but confusing 🌎",
        "Hipster choice before .io blew up ☕",
        "Legal department's nightmare ⚖️",
        "Cool until someone thinks you're Colombian coffee ☕",
    ]);
    map.insert(".xyz", &[
        "Mysterious or just random? 🎲",
        "The alphabet soup of domains 🍜",
        "Generation XYZ's domain? 🧬",
        "When every good name was taken 😩",
        "Sounds futuristic but costs $1/year 🤖",
        "Perfect for Web3 projects that rug in 3 months 🏃",
    ]);
    map.insert(".me", &[
        "A bit narcissistic, no? 😏",
        "It's all about you! 👑",
        "Personal brand overload 📸",
        "Montenegro appreciates the tourism boost 🇲🇪",
        "Resume site or ego trip? You decide 🪞",
        "Blog about your cat incoming 🐱",
    ]);
    map.insert(".shop", &[
        "Trying to sell me something? 🛍️",
        "Shop till you drop 💳",
        "E-commerce dreams loading... 🛒",
        "Dropshipping empire starts here 📦",
        "Add to cart button mandatory 🛍️",
        "Abandoned cart emails in 3...2...1 📧",
    ]);
    map.insert(".app", &[
        "Google's way of saying \"mobile first\" 📱",
        "Because every idea needs its own app now 🙄",
        "Forced HTTPS or bust 🔒",
        "PWA? Nah, let's make a native wrapper 📦",
        "App Store rejection pending 🍎",
        "Download now (please) 🙏",
    ]);
    map.insert(".tech", &[
        "Trying a bit too hard to sound futuristic ⚡",
        "Tech bro level: expert 🧑‍💻",
        "Blockchain + AI + IoT incoming 🔗🤖📡",
        "Innovation™ guaranteed 💡",
        "Sounds cooler than it actually is 🌟",
        "Perfect for vaporware announcements 🚀",
    ]);
    map.insert(".online", &[
        "We get it, you're on the internet 🌐",
        "The most redundant TLD ever 😂",
        "Because .offline wasn't an option",
        "Available for $1 during GoDaddy sales 🤑",
        "Screams \"I registered this in 2015\" 📅",
        "Literally every site is .online, Kevin",
    ]);
    map.insert(".fun", &[
        "For sites that are totally serious business 🤡",
        "Guaranteed to have at least one meme 🐸",
        "Party time all the time 🎉",
        "Probably full of rickrolls 🔊",
        "Corporate team-building page detected 🏢",
        "Fun police approved 👮",
    ]);
    map.insert(".club", &[
        "Exclusive... until anyone pays $10/year 🎉",
        "Where the VIPs hang out (Very Inexpensive Party)",
        "Members only* (*anyone can join)",
        "Nightclub or book club? Unclear 🌙📚",
        "Secret handshake required (jk just pay)",
        "Cool kids table at lunch 🥪",
    ]);
    map.insert(".biz", &[
        "The .com of 2001 called, it wants its vibe back 📠",
        "Business, but make it suspicious 😒",
        "Sounds like a scam from the start 📧",
        "Fax machine energy only 🖨️",
        "Legit businesses need not apply 🚫",
        "Dot-bomb survivor 🏚️",
    ]);
    map.insert(".info", &[
        "Trust me bro, the info is totally accurate 📜",
        "Wikipedia's shady cousin 🕵️",
        "Source? Trust me bro 📰",
        "Geocities vibes in 2026 🌐",
        "Directory of useless facts incoming 📊",
        "Click here for free iPhone!! 🍏",
    ]);

    map
});

pub static TLD_COMPLIMENTS: Lazy<HashMap<&'static str, Lines>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Lines> = HashMap::new();

    map.insert(".com", &["Classic choice! 👑", "Timeless and reliable! ⏳", "The gold standard! 🏅"]);
    map.insert(".io", &["Tech-savvy! 🚀", "Modern and sleek! 💎", "Startup energy! ⚡"]);
    map.insert(".dev", &["Clean and professional! 🧼", "Developer approved! ✅", "Straight to the point! 🎯"]);
    map.insert(".ai", &["Futuristic! 🔮", "On the cutting edge! ✂️", "Ahead of the curve! 📈"]);
    map.insert(".co", &["Smart and affordable! 💡", "Creative choice! 🎨", "Short and punchy! 👊"]);

    map
});

pub static REGISTRAR_ROASTS: Lazy<HashMap<&'static str, Lines>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Lines> = HashMap::new();

    map.insert("GoDaddy", &[
        "GoDaddy? More like GoDadd-yikes! 😬",
        "Hope you enjoy those upsell emails! 📧",
        "Super Bowl ads with scantily clad women called, they want their 2010s back 📺",
        "Domain auctions that feel like a casino 🎰",
        "Customer service roulette: will you get help or more upsells? 🎲",
        "Their dashboard is a minefield of \"recommended\" add-ons 💣",
        "Renewal prices hit harder than a surprise bill 💥",
    ]);
    map.insert("Namecheap", &[
        "Namecheap, taste expensive? 🤔",
        "At least you saved $2! 💰",
        "Free WHOIS privacy — finally a registrar that gets it 🥷",
        "Mascot is a cheap beaver, need I say more? 🦫",
        "Promo codes everywhere, coupon hunter's paradise 🎟️",
        "Clean dashboard, no upsell ambush 👍",
        "You're here because GoDaddy scared you away, right? 😏",
    ]);
    map.insert("Google Domains", &[
        "Google doesn't need more data about you 📊",
        "One more thing for Google to track 🎯",
        "Clean interface, zero upsells — suspicious 🤨",
        "RIP Google Domains, hello Squarespace Domains 😢",
        "You registered before they sold it off, didn't you? 📅",
        "Integrated with Google Workspace like everything else 🔄",
        "Too bad it's gone now, enjoy the migration chaos ✈️",
    ]);
    map.insert("Name.com", &[
        "Name.com? Creative name! 🤭",
        "Couldn't think of anything better? 💭",
        "Sounds like a placeholder until you think of something better 📝",
        "Solid service, boring branding 😴",
        "Free WHOIS privacy and no aggressive upsells — underrated gem 💎",
        "Their blog actually has useful tips, weirdly 🤓",
        "You probably found them via a random Reddit thread 🧵",
    ]);
    map.insert("Cloudflare Registrar", &[
        "At-cost pricing? Who hurt you, Cloudflare? 😇",
        "No upsells, just pure domain zen ☮️",
        "You're here for the free DNS and ego boost 🚀",
        "Transfer in, never pay markup again 🤑",
        "Locked to their nameservers — control freak much? 🔒",
        "Feels like charity until you remember they sell everything else 💸",
    ]);
    map.insert("Porkbun", &[
        "Porkbun? What are you, a BBQ startup? 🐷",
        "Absurd name, absurdly good prices 🔥",
        "Free privacy, free SSL, free hugs 🫂",
        "Their mascot is a pig in a bun — unironically adorable 🥹",
        "Dashboard so clean it hurts GoDaddy's feelings 🧼",
        "You switched here after seeing a viral tweet, admit it 📱",
        "Renewal prices don't jump — witchcraft confirmed 🪄",
    ]);
    map.insert("Squarespace Domains", &[
        "Bought the domain with the website builder bundle 📦",
        "Free with your overpriced Squarespace plan 🙃",
        "Now owning Google Domains refugees, power move ♟️",
        "Beautiful UI, beautiful markup 💅",
        "You care more about aesthetics than savings, don't you? 🎨",
    ]);

    map
});

pub static AGE_ROASTS: Lazy<HashMap<AgeBucket, Lines>> = Lazy::new(|| {
    let mut map: HashMap<AgeBucket, Lines> = HashMap::new();

    map.insert(AgeBucket::BrandNew, &[
        "Brand new! Just hatched! 🐣",
        "Fresh out of the registry oven! 🔥",
        "Registered yesterday? Smells like new domain! 🌱",
        "Age 0? You're basically a domain toddler! 👶",
    ]);
    map.insert(AgeBucket::Baby, &[
        "Still in diapers! 👶",
        "Younger than most TikTok trends! 📱",
        "Barely old enough to have an index.html! 🍼",
        "So new, the paint's still wet! 🖌️",
    ]);
    map.insert(AgeBucket::Toddler, &[
        "Fresh domain milk! 🥛",
        "Toddler domain throwing tantrums in the sandbox! 🪣",
        "Just learned to crawl... on Google! 🕷️",
        "Young enough to still believe in 100% uptime! ☁️",
    ]);
    map.insert(AgeBucket::Kid, &[
        "Getting some experience! 📚",
        "Kindergarten graduate of the internet! 🎓",
        "Survived a few Google updates — impressive! 🏅",
        "Old enough to have a favicon! 🎨",
    ]);
    map.insert(AgeBucket::Teen, &[
        "Mid-life crisis domain! 🚗",
        "Teenage domain, full of angst and broken links! 😩",
        "Remembers when mobile-first wasn't a thing! 📟",
        "Probably has a MySpace backup somewhere... 🌌",
    ]);
    map.insert(AgeBucket::Ancient, &[
        "Ancient internet artifact! 🦖",
        "Older than Instagram and still kicking! 📸",
        "Pre-dates smartphones — a true survivor! 🏺",
        "Was around when Flash was cool... RIP ⚰️",
        "Geocities called, wants its vibe back! 🏠",
        "Boasted \"Best viewed in Netscape Navigator\" once! 🌐",
        "Older than most developers using it! 👴",
    ]);

    map
});
