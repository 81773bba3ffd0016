//! Fallback word list compiled into the binary
//!
//! Used when the word-source service is unreachable by choice (`--offline`)
//! and as the dictionary universe for offline play. Common five-letter words
//! only, so offline targets stay guessable.

/// Target installed before the first fetch resolves (and kept if it never does).
pub const DEFAULT_TARGET: &str = "react";

/// Built-in five-letter words for offline play.
pub const FALLBACK_WORDS: &[&str] = &[
    "about", "above", "actor", "adult", "after", "again", "agent", "agree",
    "alarm", "album", "alert", "alike", "alive", "allow", "alone", "along",
    "anger", "angle", "angry", "apart", "apple", "apply", "arena", "argue",
    "arise", "array", "aside", "asset", "audio", "avoid", "awake", "award",
    "aware", "badge", "baker", "basic", "beach", "began", "begin", "being",
    "below", "bench", "berry", "birth", "black", "blade", "blame", "blank",
    "blast", "blend", "bless", "blind", "block", "blood", "board", "bonus",
    "boost", "booth", "bound", "brain", "brand", "brave", "bread", "break",
    "brick", "bride", "brief", "bring", "broad", "brown", "brush", "build",
    "bunch", "burst", "buyer", "cabin", "cable", "candy", "cargo", "carry",
    "catch", "cause", "chain", "chair", "chalk", "charm", "chart", "chase",
    "cheap", "check", "cheek", "cheer", "chess", "chest", "chief", "child",
    "chill", "civil", "claim", "class", "clean", "clear", "clerk", "click",
    "cliff", "climb", "clock", "close", "cloth", "cloud", "coach", "coast",
    "color", "couch", "could", "count", "court", "cover", "crack", "craft",
    "crane", "crash", "crawl", "crazy", "cream", "crime", "crisp", "cross",
    "crowd", "crown", "curve", "cycle", "daily", "dance", "delay", "depth",
    "doubt", "dozen", "draft", "drain", "drama", "dream", "dress", "drift",
    "drink", "drive", "eager", "eagle", "early", "earth", "eight", "elbow",
    "elder", "elect", "empty", "enemy", "enjoy", "enter", "entry", "equal",
    "error", "event", "every", "exact", "exist", "extra", "faith", "false",
    "fancy", "fault", "favor", "fence", "fever", "fiber", "field", "fifth",
    "fifty", "fight", "final", "first", "flame", "flash", "fleet", "float",
    "flood", "floor", "flour", "fluid", "focus", "force", "forge", "forth",
    "forty", "forum", "found", "frame", "fresh", "front", "frost", "fruit",
    "fully", "funny", "ghost", "giant", "given", "glass", "globe", "glory",
    "glove", "grace", "grade", "grain", "grand", "grant", "grape", "grasp",
    "grass", "grave", "great", "green", "greet", "grief", "gross", "group",
    "grown", "guard", "guess", "guest", "guide", "habit", "happy", "harsh",
    "heart", "heavy", "hello", "hence", "horse", "hotel", "house", "human",
    "humor", "ideal", "image", "imply", "index", "inner", "input", "issue",
    "joint", "judge", "juice", "knife", "knock", "known", "label", "labor",
    "large", "laser", "later", "laugh", "layer", "learn", "lease", "least",
    "leave", "legal", "lemon", "level", "light", "limit", "liver", "local",
    "logic", "loose", "lover", "lower", "loyal", "lucky", "lunch", "magic",
    "major", "maker", "march", "match", "maybe", "mayor", "medal", "media",
    "mercy", "merge", "merit", "metal", "meter", "might", "minor", "model",
    "money", "month", "moral", "motor", "mount", "mouse", "mouth", "movie",
    "music", "nerve", "never", "night", "noble", "noise", "north", "novel",
    "nurse", "occur", "ocean", "offer", "often", "olive", "onion", "order",
    "other", "ought", "outer", "owner", "paint", "panel", "paper", "party",
    "pause", "peace", "phase", "phone", "photo", "piano", "piece", "pilot",
    "pitch", "place", "plain", "plane", "plant", "plate", "point", "pound",
    "power", "press", "price", "pride", "prime", "print", "prior", "prize",
    "proof", "proud", "prove", "pulse", "pupil", "queen", "quick", "quiet",
    "quite", "radio", "raise", "range", "rapid", "ratio", "reach", "react",
    "ready", "realm", "rebel", "refer", "relax", "reply", "rider", "ridge",
    "right", "rigid", "risky", "river", "robot", "rocky", "rough", "round",
    "route", "royal", "rural", "scale", "scene", "scope", "score", "sense",
    "serve", "seven", "shade", "shake", "shall", "shame", "shape", "share",
    "sharp", "sheep", "sheet", "shelf", "shell", "shift", "shine", "shirt",
    "shock", "shoot", "shore", "short", "shout", "sight", "silly", "since",
    "sixth", "skill", "slate", "sleep", "slice", "slide", "small", "smart",
    "smile", "smoke", "snake", "solar", "solid", "solve", "sorry", "sound",
    "south", "space", "spare", "speak", "speed", "spend", "spice", "spike",
    "spite", "split", "sport", "squad", "stack", "staff", "stage", "stair",
    "stake", "stand", "stare", "start", "state", "steal", "steam", "steel",
    "steep", "steer", "stick", "stiff", "still", "stock", "stone", "store",
    "storm", "story", "stove", "strip", "study", "stuff", "style", "sugar",
    "suite", "sunny", "super", "sweet", "swing", "sword", "table", "taste",
    "teach", "theme", "there", "thick", "thing", "think", "third", "three",
    "throw", "tiger", "tight", "title", "today", "token", "total", "touch",
    "tough", "tower", "trace", "track", "trade", "trail", "train", "treat",
    "trend", "trial", "tribe", "trick", "troop", "truck", "truly", "trust",
    "truth", "twice", "uncle", "under", "union", "unite", "unity", "until",
    "upper", "upset", "urban", "usage", "usual", "valid", "value", "video",
    "virus", "visit", "vital", "voice", "voter", "wagon", "waste", "watch",
    "water", "wheel", "where", "which", "while", "white", "whole", "whose",
    "woman", "world", "worry", "worth", "would", "wound", "write", "wrong",
    "yield", "young", "youth",
];
