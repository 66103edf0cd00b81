// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::index::SearchError;
use serde_json::Value;

/// 查询字符串语法的子集
///
/// 支持：
/// - `*` 匹配全部文档
/// - 裸词：匹配任意字段
/// - `field:value`，嵌套字段用点号（如 `user.id:3`）
/// - `field:*` 字段存在且非空
/// - 末尾 `*` 的前缀词
/// - 双引号短语
/// - `AND` / `OR` 运算符，缺省为 `OR`，`AND` 优先级更高
///
/// `NOT`、`-`/`+` 前缀、范围、分组等其余语法一律报 `InvalidQuery`。
///
/// 文本按小写的字母数字词元比较，与经过分析的文本字段行为一致。
#[derive(Debug, Clone, PartialEq)]
pub struct QueryString {
    groups: Vec<Vec<Clause>>,
}

#[derive(Debug, Clone, PartialEq)]
enum Clause {
    MatchAll,
    Exists(String),
    Term { field: Option<String>, value: Term },
}

#[derive(Debug, Clone, PartialEq)]
enum Term {
    Words(Vec<String>),
    Prefix(String),
}

#[derive(Debug, PartialEq)]
enum Token {
    And,
    Or,
    Atom(String),
}

impl QueryString {
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(SearchError::InvalidQuery("empty query".to_string()));
        }

        let mut groups: Vec<Vec<Clause>> = vec![Vec::new()];
        let mut pending_and = false;
        for token in tokens {
            match token {
                Token::And => {
                    if groups.last().is_none_or(|group| group.is_empty()) {
                        return Err(SearchError::InvalidQuery(
                            "AND without left operand".to_string(),
                        ));
                    }
                    pending_and = true;
                }
                Token::Or => {
                    if pending_and {
                        return Err(SearchError::InvalidQuery("AND followed by OR".to_string()));
                    }
                    groups.push(Vec::new());
                }
                Token::Atom(atom) => {
                    let clause = parse_clause(&atom)?;
                    match groups.last_mut() {
                        Some(group) if pending_and || group.is_empty() => group.push(clause),
                        _ => groups.push(vec![clause]),
                    }
                    pending_and = false;
                }
            }
        }

        if pending_and {
            return Err(SearchError::InvalidQuery(
                "AND without right operand".to_string(),
            ));
        }
        groups.retain(|group| !group.is_empty());
        if groups.is_empty() {
            return Err(SearchError::InvalidQuery("empty query".to_string()));
        }
        Ok(Self { groups })
    }

    /// 文档是否命中查询
    pub fn matches(&self, document: &Value) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|clause| clause.matches(document)))
    }
}

impl Clause {
    fn matches(&self, document: &Value) -> bool {
        match self {
            Clause::MatchAll => true,
            Clause::Exists(field) => {
                let mut leaves = Vec::new();
                collect_path(document, field, &mut leaves);
                leaves.iter().any(|leaf| !leaf.is_null())
            }
            Clause::Term { field, value } => {
                let mut leaves = Vec::new();
                match field {
                    Some(field) => collect_path(document, field, &mut leaves),
                    None => collect_leaves(document, &mut leaves),
                }
                leaves.iter().any(|leaf| value.matches(leaf))
            }
        }
    }
}

impl Term {
    fn matches(&self, leaf: &Value) -> bool {
        match self {
            Term::Words(words) => {
                if let (Value::Number(number), [word]) = (leaf, words.as_slice()) {
                    if let (Some(left), Ok(right)) = (number.as_f64(), word.parse::<f64>()) {
                        return left == right;
                    }
                }
                let tokens = leaf_tokens(leaf);
                !words.is_empty()
                    && tokens
                        .windows(words.len())
                        .any(|window| window == words.as_slice())
            }
            Term::Prefix(prefix) => leaf_tokens(leaf)
                .iter()
                .any(|token| token.starts_with(prefix.as_str())),
        }
    }
}

/// 未实现的语法：分组、范围、提升、模糊与通配
const RESERVED: &[char] = &['(', ')', '[', ']', '{', '}', '^', '~', '?', '!', '<', '>', '/'];

fn unsupported(what: &str) -> SearchError {
    SearchError::InvalidQuery(format!("unsupported query syntax: {}", what))
}

fn tokenize(input: &str) -> Result<Vec<Token>, SearchError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let flush = |current: &mut String, tokens: &mut Vec<Token>| -> Result<(), SearchError> {
        if current.is_empty() {
            return Ok(());
        }
        let token = match current.as_str() {
            "AND" | "&&" => Token::And,
            "OR" | "||" => Token::Or,
            "NOT" | "TO" => return Err(unsupported(current.as_str())),
            atom if atom.starts_with('-') || atom.starts_with('+') => {
                return Err(unsupported(atom))
            }
            _ => Token::Atom(current.clone()),
        };
        tokens.push(token);
        current.clear();
        Ok(())
    };

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_quotes => flush(&mut current, &mut tokens)?,
            c if RESERVED.contains(&c) && !in_quotes => return Err(unsupported(&c.to_string())),
            c => current.push(c),
        }
    }
    if in_quotes {
        return Err(SearchError::InvalidQuery("unterminated phrase".to_string()));
    }
    flush(&mut current, &mut tokens)?;
    Ok(tokens)
}

fn parse_clause(atom: &str) -> Result<Clause, SearchError> {
    if atom == "*" {
        return Ok(Clause::MatchAll);
    }

    let (field, raw) = match split_field(atom) {
        Some((field, raw)) => (Some(field.to_string()), raw),
        None => (None, atom),
    };

    if raw.is_empty() {
        return Err(SearchError::InvalidQuery(format!("missing value in '{}'", atom)));
    }

    if raw == "*" {
        return Ok(match field {
            Some(field) => Clause::Exists(field),
            None => Clause::MatchAll,
        });
    }

    let value = if let Some(phrase) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Term::Words(tokens_of(phrase))
    } else if let Some(prefix) = raw.strip_suffix('*') {
        Term::Prefix(prefix.to_lowercase())
    } else {
        Term::Words(tokens_of(raw))
    };

    if let Term::Words(words) = &value {
        if words.is_empty() {
            return Err(SearchError::InvalidQuery(format!("no searchable text in '{}'", atom)));
        }
    }
    Ok(Clause::Term { field, value })
}

/// `field:value` 中的字段部分；短语内的冒号不算
fn split_field(atom: &str) -> Option<(&str, &str)> {
    let colon = atom.find(':')?;
    let quote = atom.find('"');
    if quote.is_some_and(|quote| quote < colon) {
        return None;
    }
    Some((&atom[..colon], &atom[colon + 1..]))
}

fn tokens_of(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn leaf_tokens(leaf: &Value) -> Vec<String> {
    match leaf {
        Value::String(text) => tokens_of(text),
        Value::Number(number) => tokens_of(&number.to_string()),
        Value::Bool(flag) => vec![flag.to_string()],
        _ => Vec::new(),
    }
}

fn collect_path<'a>(value: &'a Value, path: &str, out: &mut Vec<&'a Value>) {
    let mut current = vec![value];
    for segment in path.split('.') {
        let mut next = Vec::new();
        for node in current {
            match node {
                Value::Object(map) => {
                    if let Some(child) = map.get(segment) {
                        next.push(child);
                    }
                }
                Value::Array(items) => {
                    next.extend(items.iter().filter_map(|item| item.get(segment)));
                }
                _ => {}
            }
        }
        current = next;
    }
    for node in current {
        collect_leaves(node, out);
    }
}

fn collect_leaves<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => map.values().for_each(|child| collect_leaves(child, out)),
        Value::Array(items) => items.iter().for_each(|item| collect_leaves(item, out)),
        leaf => out.push(leaf),
    }
}
