// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! JSON路径查询
//!
//! 支持的语法：
//! - `$` 根节点
//! - `.name`、`['name']`、`["name"]` 子节点
//! - `.*`、`[*]` 通配符
//! - `[n]` 数组下标，负数从末尾计数
//! - `..name`、`..*`、`..[n]` 递归下降

use serde::Serialize;
use serde_json::Value;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};
use thiserror::Error;

/// JSON路径错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonPathError {
    /// 缺少根节点 `$`
    #[error("JSON path must start with '$'")]
    MissingRoot,
    /// 路径意外结束
    #[error("Unexpected end of JSON path")]
    UnexpectedEnd,
    /// 非法字符
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { position: usize, found: char },
    /// 下标无效
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Name(String),
    Index(i64),
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Child(Selector),
    Descendant(Selector),
}

/// 已解析的JSON路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

impl JsonPath {
    /// 解析JSON路径
    ///
    /// # 参数
    ///
    /// * `path` - 以 `$` 开头的路径表达式
    ///
    /// # 返回值
    ///
    /// * `Ok(JsonPath)` - 解析成功
    /// * `Err(JsonPathError)` - 语法错误
    pub fn parse(path: &str) -> Result<Self, JsonPathError> {
        let segments = Parser::new(path).parse()?;
        Ok(Self { segments })
    }

    /// 查询匹配的节点
    ///
    /// 结果按遍历顺序返回，对象按键的迭代顺序遍历
    pub fn query<'a>(&self, value: &'a Value) -> Vec<&'a Value> {
        let mut nodes = vec![value];
        for segment in &self.segments {
            let mut next = Vec::new();
            for node in nodes {
                match segment {
                    Segment::Child(selector) => select(node, selector, &mut next),
                    Segment::Descendant(selector) => {
                        let mut stack = vec![node];
                        while let Some(current) = stack.pop() {
                            select(current, selector, &mut next);
                            push_children_reversed(current, &mut stack);
                        }
                    }
                }
            }
            nodes = next;
        }
        nodes
    }
}

impl FromStr for JsonPath {
    type Err = JsonPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 解析并查询
pub fn query<'a>(value: &'a Value, path: &str) -> Result<Vec<&'a Value>, JsonPathError> {
    Ok(JsonPath::parse(path)?.query(value))
}

/// 路径是否至少匹配一个节点
pub fn matches(value: &Value, path: &str) -> Result<bool, JsonPathError> {
    Ok(!query(value, path)?.is_empty())
}

/// JSON路径断言
///
/// 将 `received` 序列化为JSON后查询 `path`，结果与 `expected` 不一致时 panic。
/// 通常通过 [`assert_json_path!`](crate::assert_json_path) 调用。
#[track_caller]
pub fn assert_json_path<T: Serialize + ?Sized>(received: &T, path: &str, expected: bool) {
    let value = match serde_json::to_value(received) {
        Ok(value) => value,
        Err(e) => panic!("cannot convert received value to JSON: {}", e),
    };
    let pass = match matches(&value, path) {
        Ok(pass) => pass,
        Err(e) => panic!("invalid JSON path {}: {}", path, e),
    };

    if pass != expected {
        if expected {
            panic!("expected {} to match JSON path {}", value, path);
        } else {
            panic!("expected {} not to match JSON path {}", value, path);
        }
    }
}

/// 断言值匹配（或不匹配）JSON路径
///
/// ```
/// use calcrs::assert_json_path;
///
/// let user = serde_json::json!({ "name": "Ivan" });
/// assert_json_path!(user, "$.name");
/// assert_json_path!(user, not "$.age");
/// ```
#[macro_export]
macro_rules! assert_json_path {
    ($received:expr, not $path:expr) => {
        $crate::utils::json_path::assert_json_path(&$received, $path, false)
    };
    ($received:expr, $path:expr) => {
        $crate::utils::json_path::assert_json_path(&$received, $path, true)
    };
}

fn select<'a>(node: &'a Value, selector: &Selector, out: &mut Vec<&'a Value>) {
    match (selector, node) {
        (Selector::Name(name), Value::Object(map)) => out.extend(map.get(name)),
        (Selector::Index(index), Value::Array(items)) => {
            let len = items.len() as i64;
            let resolved = if *index < 0 { len + index } else { *index };
            if (0..len).contains(&resolved) {
                out.push(&items[resolved as usize]);
            }
        }
        (Selector::Wildcard, Value::Object(map)) => out.extend(map.values()),
        (Selector::Wildcard, Value::Array(items)) => out.extend(items.iter()),
        _ => {}
    }
}

fn push_children_reversed<'a>(node: &'a Value, stack: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => stack.extend(map.values().rev()),
        Value::Array(items) => stack.extend(items.iter().rev()),
        _ => {}
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<Segment>, JsonPathError> {
        match self.chars.next() {
            Some((_, '$')) => {}
            _ => return Err(JsonPathError::MissingRoot),
        }

        let mut segments = Vec::new();
        while let Some((position, c)) = self.chars.next() {
            let segment = match c {
                '.' if self.eat('.') => {
                    if self.eat('[') {
                        Segment::Descendant(self.bracket_selector()?)
                    } else {
                        Segment::Descendant(self.dotted_selector()?)
                    }
                }
                '.' => Segment::Child(self.dotted_selector()?),
                '[' => Segment::Child(self.bracket_selector()?),
                found => return Err(JsonPathError::UnexpectedChar { position, found }),
            };
            segments.push(segment);
        }

        Ok(segments)
    }

    fn eat(&mut self, expected: char) -> bool {
        self.chars.next_if(|&(_, c)| c == expected).is_some()
    }

    fn expect(&mut self, expected: char) -> Result<(), JsonPathError> {
        match self.chars.next() {
            Some((_, c)) if c == expected => Ok(()),
            Some((position, found)) => Err(JsonPathError::UnexpectedChar { position, found }),
            None => Err(JsonPathError::UnexpectedEnd),
        }
    }

    fn dotted_selector(&mut self) -> Result<Selector, JsonPathError> {
        match self.chars.peek().copied() {
            None => Err(JsonPathError::UnexpectedEnd),
            Some((_, '*')) => {
                self.chars.next();
                Ok(Selector::Wildcard)
            }
            Some((position, found @ ('.' | '['))) => {
                Err(JsonPathError::UnexpectedChar { position, found })
            }
            Some((start, _)) => {
                let mut end = self.input.len();
                while let Some(&(i, c)) = self.chars.peek() {
                    if c == '.' || c == '[' {
                        end = i;
                        break;
                    }
                    self.chars.next();
                }
                Ok(Selector::Name(self.input[start..end].to_string()))
            }
        }
    }

    fn bracket_selector(&mut self) -> Result<Selector, JsonPathError> {
        let selector = match self.chars.next() {
            None => return Err(JsonPathError::UnexpectedEnd),
            Some((_, '*')) => Selector::Wildcard,
            Some((_, quote @ ('\'' | '"'))) => Selector::Name(self.quoted(quote)?),
            Some((start, c)) if c == '-' || c.is_ascii_digit() => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, c)) = self.chars.peek() {
                    if c == ']' {
                        break;
                    }
                    self.chars.next();
                    end = i + c.len_utf8();
                }
                let raw = &self.input[start..end];
                let index = raw
                    .parse()
                    .map_err(|_| JsonPathError::InvalidIndex(raw.to_string()))?;
                Selector::Index(index)
            }
            Some((position, found)) => {
                return Err(JsonPathError::UnexpectedChar { position, found })
            }
        };

        self.expect(']')?;
        Ok(selector)
    }

    fn quoted(&mut self, quote: char) -> Result<String, JsonPathError> {
        let mut name = String::new();
        loop {
            match self.chars.next() {
                None => return Err(JsonPathError::UnexpectedEnd),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, c)) => name.push(c),
                    None => return Err(JsonPathError::UnexpectedEnd),
                },
                Some((_, c)) if c == quote => return Ok(name),
                Some((_, c)) => name.push(c),
            }
        }
    }
}
