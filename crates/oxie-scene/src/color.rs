//! Heuristic encoder color assignment.
//!
//! Maps a parameter's abbreviation and display name to a device palette
//! index. The rules are an ordered table grouped by parameter family and
//! evaluated first-match-wins; the ordering is load-bearing because some
//! abbreviations (a bare "DEL", say) would match several families, and the
//! more specific family is checked earlier. Classification never fails:
//! anything unmatched falls through to [`NEUTRAL_COLOR`].

use std::sync::OnceLock;

use regex::Regex;

/// Palette index assigned when no rule matches.
pub const NEUTRAL_COLOR: u8 = 22;

/// One classification rule: a palette index plus the predicates that select
/// it. A rule matches when the uppercased abbreviation equals one of
/// `exact`, matches one of the `patterns`, or the lowercased display name
/// contains one of `name_hints`.
struct Rule {
    family: &'static str,
    color: u8,
    exact: &'static [&'static str],
    patterns: &'static [&'static str],
    name_hints: &'static [&'static str],
}

/// Rule table in priority order.
const RULES: &[Rule] = &[
    Rule {
        family: "level",
        color: 93, // bright green, performance params stand out
        exact: &[
            "VOL", "SLEV", "TLEV", "PVOL", "ELVL", "NLEV", "BLEV", "ALEV", "TRLV",
        ],
        patterns: &["^LEV[0-9]?$", "^.LEV$", "^LV[0-9]$", "VOL[0-9]$"],
        name_hints: &[],
    },
    Rule {
        family: "pan",
        color: 49, // yellow
        exact: &["PAN", "ELPN", "ERPN"],
        patterns: &["^PAN[0-9]$", "^PN[0-9]$"],
        name_hints: &[],
    },
    Rule {
        family: "filter cutoff",
        color: 84, // bright cyan
        exact: &["FREQ", "CUT", "LPCT", "HPCT"],
        patterns: &[],
        name_hints: &[],
    },
    Rule {
        family: "delay",
        color: 71, // purple
        exact: &["DELT", "DELF", "DELM", "TIME", "FDBK", "PING", "RDLY", "RDEC"],
        patterns: &[],
        name_hints: &["dly", "delay"],
    },
    Rule {
        family: "delay send",
        color: 72,
        exact: &["DEL"],
        patterns: &["DEL$", "^.DEL$"],
        name_hints: &[],
    },
    Rule {
        family: "reverb",
        color: 0, // dark purple
        exact: &[
            "REVP", "REVD", "REVM", "PDLY", "DECY", "SHFQ", "SHGN", "RSHF", "RSHG", "RHPF",
            "RLPF", "RMIX", "SIZE",
        ],
        patterns: &[],
        name_hints: &["rev ", "reverb"],
    },
    Rule {
        family: "reverb send",
        color: 1,
        exact: &["REV", "RSND", "EREV"],
        patterns: &["REV$"],
        name_hints: &[],
    },
    Rule {
        family: "chorus",
        color: 18, // lavender
        exact: &[
            "CHRD", "CHRS", "CHRM", "CDPT", "CSPD", "CHPF", "CWTH", "DEPT", "SPED", "WDTH",
        ],
        patterns: &[],
        name_hints: &["chor"],
    },
    Rule {
        family: "chorus send",
        color: 17,
        exact: &["CHR", "ECHR"],
        patterns: &["^.CHR$"],
        name_hints: &[],
    },
    Rule {
        family: "filter envelope",
        color: 46, // orange
        exact: &["FATK", "FDEC", "FSUS", "FREL", "FDLY", "FRST", "FENV", "FTRK"],
        patterns: &[],
        name_hints: &[],
    },
    Rule {
        family: "amp envelope",
        color: 55, // salmon
        exact: &["AATK", "AHLD", "ADEC", "ASUS", "AREL", "ARST", "MODE", "ATIM"],
        patterns: &[],
        name_hints: &[],
    },
    Rule {
        family: "lfo",
        color: 74, // magenta
        exact: &[],
        patterns: &[
            "^SPD[0-9]$",
            "^MUL[0-9]$",
            "^FAD[0-9]$",
            "^DST[0-9]$",
            "^WAV[0-9]$",
            "^PHS[0-9]$",
            "^TRG[0-9]$",
            "^DPT[0-9]$",
        ],
        name_hints: &["lfo", "lf1", "lf2", "lf3"],
    },
    Rule {
        family: "oscillator",
        color: 5, // blue
        exact: &[
            "TUNE", "OMOD", "DRIF", "HARM", "DETN", "ALGO", "MIX", "WAVE", "OSC2", "GLID",
            "VLVL", "SWAV", "MWAV", "SDTN", "SMIX", "MOCT", "SANI",
        ],
        patterns: &[
            "^TUN[0-9]$",
            "^WAV[0-9]$",
            "^PD[0-9]$",
            "^LEV[0-9]$",
            "^LIN[0-9]$",
            "^RAT[A-Z]$",
        ],
        name_hints: &["osc", "tune"],
    },
    Rule {
        family: "filter",
        color: 83, // teal
        exact: &["RESO", "TYPE", "BASE", "HPF", "LPF", "HPRS", "HPCT"],
        patterns: &[],
        name_hints: &["filt", "res"],
    },
    Rule {
        family: "noise",
        color: 35, // brown
        exact: &["NATK", "NDEC", "NLEV", "NCHR", "NMOD", "NWID", "NOIS"],
        patterns: &[],
        name_hints: &["noise", "nois"],
    },
    Rule {
        family: "drive",
        color: 51, // red
        exact: &["OVER", "ORTE", "BR", "SRR", "SRTE", "DRIV", "CRSH", "FOLD"],
        patterns: &[],
        name_hints: &["overdrive", "bit"],
    },
    Rule {
        family: "compressor",
        color: 32, // rust
        exact: &["CTHR", "CATK", "CREL", "CRAT", "CMKP", "CSSR", "CSFL", "CMIX", "COMP"],
        patterns: &[],
        name_hints: &["comp"],
    },
    Rule {
        family: "external input",
        color: 25, // slate
        exact: &["ELLV", "ERLV"],
        patterns: &["^E.LV$", "^E.PN$"],
        name_hints: &["ext"],
    },
    Rule {
        family: "fm drum",
        color: 6, // light blue
        exact: &["SWTM", "SWDP", "CWAV", "ABWV", "BHLD", "BDEC", "TRNS", "NWID"],
        patterns: &[],
        name_hints: &[],
    },
    Rule {
        family: "send",
        color: 34, // brown
        exact: &[],
        patterns: &["^SND[0-9]$", "^.SND$"],
        name_hints: &["send"],
    },
];

struct CompiledRule {
    rule: &'static Rule,
    regexes: Vec<Regex>,
}

static COMPILED_RULES: OnceLock<Vec<CompiledRule>> = OnceLock::new();

fn compiled_rules() -> &'static [CompiledRule] {
    COMPILED_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| CompiledRule {
                rule,
                regexes: rule
                    .patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("invalid color rule pattern"))
                    .collect(),
            })
            .collect()
    })
}

/// Returns the palette index for a parameter, given its abbreviation and
/// display name. First matching rule wins; unmatched or empty input yields
/// [`NEUTRAL_COLOR`].
pub fn color_for_param(abbr: &str, name: &str) -> u8 {
    let abbr = abbr.to_uppercase();
    let name = name.to_lowercase();

    for compiled in compiled_rules() {
        let rule = compiled.rule;
        if rule.exact.iter().any(|&e| e == abbr)
            || compiled.regexes.iter().any(|re| re.is_match(&abbr))
            || rule.name_hints.iter().any(|&h| name.contains(h))
        {
            return rule.color;
        }
    }
    NEUTRAL_COLOR
}
