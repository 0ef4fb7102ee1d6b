//! Merchant-name fragments per spending category.
//!
//! Keywords are lowercase. They are compared against narratives with all
//! whitespace removed on both sides, so `origin energy` also matches
//! `ORIGINENERGY 0123`.

use super::Category;

pub const GROCERY_STORES: &[&str] = &[
    "woolworths", "coles", "aldi", "iga", "foodworks", "harris farm", "costco",
    "spar", "foodland", "drakes", "romeo's", "supabarn", "leo's fine food",
    "ritchies", "fresh provisions", "farmer jack's", "spudshed",
    "7-eleven", "night owl", "nrma food", "bp shop", "caltex woolworths",
    "coles express", "metro", "uchoose", "friendly grocer",
    "supa iga", "xpress", "nqr", "cheap as chips", "save more",
    "wray organic", "flannery's", "the source bulk foods", "goodies and grains",
    "lettuce deliver", "fruitezy", "fresh st market", "fresh pantry", "fresh choice",
    "foodary", "ezy mart", "quickstop", "on the run", "otr", "starmart",
    "ampol foodary", "united petroleum",
];

pub const INSURANCE_COMPANIES: &[&str] = &[
    "allianz", "aami", "bupa", "medibank", "nib", "qbe", "suncorp", "youi",
    "budget direct", "hcf", "ahm", "apia", "cgu", "gio", "racv", "racq", "rac",
    "nrma insurance", "real insurance", "woolworths insurance", "coles insurance",
    "australia post insurance", "virgin money insurance", "comminsure",
    "hbf", "hif", "frank health insurance", "gmhba", "defence health",
    "teachers health", "nurses & midwives health", "westfund", "peoplecare",
    "australian unity", "cbhs", "rt health", "navy health", "police health",
    "emergency services health", "doctors' health fund", "onemedifund",
    "health care insurance", "health partners", "latrobe health services",
    "mildura health fund", "phoenix health fund", "qantas insurance",
    "st.luke's health", "transport health", "uni-health insurance",
    "westpac insurance", "anz insurance", "nab insurance", "ing insurance",
    "bendigo bank insurance", "bank of melbourne insurance", "bank sa insurance",
    "st.george insurance", "insurance australia group", "zurich australia",
    "hollard insurance", "auto & general insurance", "progressive insurance",
    "insurance", "life insurance", "health insurance", "car insurance",
    "home insurance", "contents insurance", "travel insurance", "pet insurance",
    "landlord insurance", "business insurance", "income protection",
];

pub const UTILITIES: &[&str] = &[
    // Electricity and gas retailers
    "origin energy", "agl", "energyaustralia", "alinta energy", "red energy",
    "simply energy", "powershop", "momentum energy", "lumo energy", "dodo power & gas",
    "click energy", "powerdirect", "diamond energy", "sumo", "tango energy",
    "people energy", "globird energy", "nectr", "mojo power", "energy locals",
    "elysian energy", "pooled energy", "qenergy", "reamenergy", "actewagl",
    "aurora energy",
    // Water
    "sydney water", "melbourne water", "south east water", "yarra valley water",
    "western water", "hunter water", "sa water", "water corporation", "taswater",
    "icon water", "power and water corporation",
    // Electricity distributors
    "ergon energy", "energex", "western power", "ausnet services", "citipower",
    "powercor", "united energy", "jemena", "essential energy", "endeavour energy",
    "ausgrid", "evoenergy", "tasnetworks", "powerwater", "horizon power",
    // Gas distributors
    "multinet gas", "australian gas networks", "jemena gas", "atco gas australia",
    "tas gas networks", "evoenergy gas",
    // LPG
    "elgas", "kleenheat", "origin lpg", "supagas",
    // Waste
    "cleanaway", "veolia", "suez", "remondis", "jj richards", "solo resource recovery",
    "sita", "visy", "bingo industries", "toxfree", "resourceco", "repurpose it",
    "city circle group", "alex fraser group", "polytrade recycling", "iq renew",
    "skm recycling", "visy recycling", "cleanaway recycling",
    // Tolls, vehicle charging, home security
    "tesla", "eastlink", "arlo",
];

pub const DIGITAL_ENTERTAINMENT: &[&str] = &[
    "netflix", "stan", "binge", "kayo", "disney+", "amazon prime",
    "apple tv+", "britbox", "hayu", "paramount+", "shudder", "acorn tv",
    "youtube premium", "curiositystream", "docplay", "iwonder",
    "mubi", "quickflix", "foxtel now", "fetch tv", "telstra tv",
    "optus sport", "spotify", "apple music", "tidal", "youtube music",
    "deezer", "soundcloud", "audible", "kindle unlimited", "scribd",
    "playstation plus", "xbox game pass", "nintendo switch online",
    "google stadia", "nvidia geforce now", "ea play", "uplay+",
    "crunchyroll", "animelab", "funimation", "twitch",
    "neon", "vimeo on demand", "google play movies", "microsoft movies & tv",
    "abc iview", "steam games", "amznprimeau", "youtube", "sbs on demand",
    "7plus", "9now", "10 play",
];

pub const INTERNET_SERVICE_PROVIDERS: &[&str] = &[
    "telstra", "optus", "tpg", "iinet", "aussie broadband", "vodafone", "dodo",
    "belong", "tangerine", "mate", "exetel", "superloop", "spintel", "internode",
    "ipstar", "skymesh", "activ8me", "harbour isp", "leaptel", "southern phone",
    "ant communications", "nbn", "national broadband network", "starlink",
    "foxtel broadband", "amaysim", "kogan internet", "aldi mobile", "boost mobile",
    "lebara", "lycamobile", "woolworths mobile", "coles mobile", "bendigo telco",
    "commander", "future broadband", "tangerine telecom",
    "moose mobile", "wooliesmobile", "linkedin", "numobile", "circles.life",
    "felix mobile", "gomo",
];

pub const FAST_FOOD_RESTAURANTS: &[&str] = &[
    "mcdonalds", "burger king", "kfc", "subway", "dominos", "pizza hut",
    "taco bell", "wendy's", "popeyes", "chipotle", "five guys", "in-n-out",
    "shake shack", "whataburger", "chick-fil-a", "arby's", "panera bread",
    "dunkin' donuts", "starbucks", "costa coffee", "tim hortons", "hungry jack's",
    "red rooster", "oporto", "grill'd", "nando's", "guzman y gomez", "mad mex",
    "boost juice", "chatime", "gong cha", "coco fresh tea & juice", "betty's burgers",
    "bakers delight", "coffee", "dumpling", "hotel", "bakery", "cafe", "hunky dory",
    "soulpress", "foster & black", "doordash", "soul origin",
];

pub const OTHER_GOODS: &[&str] = &[
    "ikea", "amazon", "ebay", "target", "kmart", "big w", "bunnings",
    "officeworks", "jb hi-fi", "harvey norman", "the good guys",
    "myer", "david jones", "catch", "kogan", "temple & webster",
    "wayfair", "adairs", "fantastic furniture", "freedom", "amart",
    "super retail group", "rebel", "bcf", "supercheap auto", "anaconda",
    "spotlight", "lincraft", "typo", "cotton on", "uniqlo", "h&m",
    "zara", "the iconic", "asos", "boohoo", "shein", "chemist warehouse",
    "priceline", "betta", "shaver shop", "harris scarfe", "terry white",
    "petbarn", "pet stock", "my pet warehouse",
];

/// Merchant registries in match priority order.
pub const REGISTRIES: &[(Category, &[&str])] = &[
    (Category::Groceries, GROCERY_STORES),
    (Category::Insurance, INSURANCE_COMPANIES),
    (Category::Utilities, UTILITIES),
    (Category::DigitalEntertainment, DIGITAL_ENTERTAINMENT),
    (Category::OnlineServices, INTERNET_SERVICE_PROVIDERS),
    (Category::EatingOut, FAST_FOOD_RESTAURANTS),
    (Category::OtherGoods, OTHER_GOODS),
];

/// Generic words tried only when no merchant registry matched, same order.
pub const FALLBACK_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Groceries, &["grocery", "supermarket"]),
    (Category::Insurance, &["insurance"]),
    (Category::Utilities, &["utility", "energy", "water", "gas"]),
    (Category::DigitalEntertainment, &["entertainment", "streaming", "subscription"]),
    (Category::OnlineServices, &["internet", "broadband", "mobile", "paypal"]),
    (Category::EatingOut, &["restaurant", "cafe", "food"]),
    (Category::OtherGoods, &["shopping", "store", "retail"]),
];
