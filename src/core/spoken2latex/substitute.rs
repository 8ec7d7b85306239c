//! Dictionary substitution pass.
//!
//! Every rule runs against the cumulative output of the rules before it.
//! Matches are whole words only, and a word already preceded by a backslash
//! is an emitted LaTeX control word (`\pi`, `\times`), never a spoken phrase.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::dictionary::{ordered_rules, PhraseRule, RuleOrder};

struct CompiledRule {
    rule: PhraseRule,
    regex: Regex,
}

lazy_static! {
    static ref LONGEST_FIRST: Vec<CompiledRule> = compile(RuleOrder::LongestFirst);
    static ref DECLARATION: Vec<CompiledRule> = compile(RuleOrder::Declaration);
}

fn compile(order: RuleOrder) -> Vec<CompiledRule> {
    ordered_rules(order)
        .into_iter()
        .map(|rule| CompiledRule {
            regex: phrase_regex(rule.phrase),
            rule,
        })
        .collect()
}

fn phrase_regex(phrase: &str) -> Regex {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    let pattern = format!(
        r"(?i)(?P<pre>\s*)(?P<esc>\\?)\b{}\b(?P<post>\s*)",
        words.join(r"\s+")
    );
    Regex::new(&pattern).unwrap()
}

pub fn substitute_phrases(text: &str, order: RuleOrder) -> String {
    let rules: &[CompiledRule] = match order {
        RuleOrder::LongestFirst => &LONGEST_FIRST,
        RuleOrder::Declaration => &DECLARATION,
    };

    let mut out = text.to_string();
    for compiled in rules {
        if compiled.regex.is_match(&out) {
            out = apply_rule(&out, compiled);
        }
    }
    out
}

fn apply_rule(text: &str, compiled: &CompiledRule) -> String {
    let rule = compiled.rule;
    compiled
        .regex
        .replace_all(text, |caps: &Captures| {
            if !caps["esc"].is_empty() {
                return caps[0].to_string();
            }
            let pre = &caps["pre"];
            let post = &caps["post"];

            // Filler words vanish along with one side of their spacing.
            if rule.latex.is_empty() {
                return if post.is_empty() {
                    String::new()
                } else {
                    pre.to_string()
                };
            }

            let mut out = String::with_capacity(pre.len() + rule.latex.len() + post.len());
            if !rule.attaches_left() {
                out.push_str(pre);
            }
            out.push_str(rule.latex);
            if !rule.absorbs_following_space() {
                out.push_str(post);
            }
            out
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(text: &str) -> String {
        substitute_phrases(text, RuleOrder::LongestFirst)
    }

    #[test]
    fn whole_words_only() {
        assert_eq!(sub("spin"), "spin");
        assert_eq!(sub("pi"), "\\pi");
        assert_eq!(sub("2 pi r"), "2 \\pi r");
    }

    #[test]
    fn emitted_commands_are_not_rewritten() {
        assert_eq!(sub("\\pi \\times \\sum"), "\\pi \\times \\sum");
        assert_eq!(sub("times"), "\\times");
    }

    #[test]
    fn postfix_powers_attach_to_operand() {
        assert_eq!(sub("x squared plus y cubed"), "x^{2} + y^{3}");
    }

    #[test]
    fn openers_absorb_following_space() {
        assert_eq!(sub("square root of 4"), "\\sqrt{4");
        assert_eq!(sub("cube root of 8"), "\\sqrt[3]{8");
    }

    #[test]
    fn longest_phrase_takes_precedence() {
        assert_eq!(sub("a less than or equal b"), "a \\leq b");
        assert_eq!(sub("x not element of s"), "x \\notin s");
        assert_eq!(sub("natural log x"), "\\ln x");
    }

    #[test]
    fn declaration_order_shadows_longer_phrases() {
        let legacy = substitute_phrases("a less than or equal b", RuleOrder::Declaration);
        assert_eq!(legacy, "a < or equal b");
    }

    #[test]
    fn filler_words_vanish() {
        assert_eq!(sub("fraction numerator a over b"), "\\frac{a}{b");
        assert_eq!(sub("a denominator"), "a");
    }

    #[test]
    fn case_insensitive_match() {
        assert_eq!(sub("Alpha"), "\\alpha");
    }
}
