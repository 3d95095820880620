//! # Report Parser Module / 报告解析模块
//!
//! Streaming parser for the JUnit-style XML report PHPUnit emits via
//! `--log-junit`. The parser yields test case outcomes lazily, in document
//! order, from any nesting depth below the root `<testsuites>` collection;
//! suites may contain suites. It is finite and not restartable mid-stream,
//! but can be re-opened from scratch on the same file.
//!
//! 针对 PHPUnit 通过 `--log-junit` 生成的 JUnit 风格 XML 报告的流式解析器。
//! 解析器按文档顺序惰性产出测试用例结果，支持根 `<testsuites>`
//! 集合下的任意嵌套深度；套件可以包含套件。它是有限的，不能在流中途重启，
//! 但可以在同一文件上从头重新打开。

use crate::core::models::{RunError, TestOutcome};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A lazy iterator over the test case outcomes of one report file.
/// 针对一个报告文件的测试用例结果的惰性迭代器。
pub struct ReportCases {
    reader: Reader<BufReader<File>>,
    seen_root: bool,
    done: bool,
}

impl ReportCases {
    /// Opens a report file for traversal. The file must exist; absence of a
    /// report is decided by the orchestrator before parsing starts.
    ///
    /// 打开报告文件以进行遍历。文件必须存在；
    /// 报告是否缺失由编排器在解析开始前判断。
    pub fn open(path: &Path) -> Result<Self, RunError> {
        let mut reader = Reader::from_file(path).map_err(|e| {
            RunError::ReportMalformed(format!("cannot open report {}: {e}", path.display()))
        })?;
        reader.config_mut().trim_text(true);
        Ok(Self {
            reader,
            seen_root: false,
            done: false,
        })
    }

    /// Reads one `<testcase>` element that was opened by `start`.
    /// Only the first direct `failure` or `error` child contributes to the
    /// outcome; later ones and any other children are skipped.
    fn read_case(
        &mut self,
        start: BytesStart<'static>,
        is_empty: bool,
    ) -> Result<TestOutcome, RunError> {
        let name = require_attr(&start, "name")?;
        let time = require_attr(&start, "time")?;
        let duration_secs: f64 = time.parse().map_err(|_| {
            RunError::ReportMalformed(format!(
                "testcase '{name}' has a non-numeric time attribute: '{time}'"
            ))
        })?;
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(RunError::ReportMalformed(format!(
                "testcase '{name}' has an invalid time attribute: '{time}'"
            )));
        }

        let mut failure: Option<String> = None;

        if !is_empty {
            let mut depth = 0usize;
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match self.read_event(&mut buf)? {
                    Event::Start(e) => {
                        let kind = element_name(&e);
                        if depth == 0 && failure.is_none() && is_failure_kind(&kind) {
                            let subtype = require_attr(&e, "type")?;
                            let body = self.collect_text_until_end()?;
                            failure = Some(format_detail(&kind, &subtype, &body));
                        } else {
                            depth += 1;
                        }
                    }
                    Event::Empty(e) => {
                        let kind = element_name(&e);
                        if depth == 0 && failure.is_none() && is_failure_kind(&kind) {
                            let subtype = require_attr(&e, "type")?;
                            failure = Some(format_detail(&kind, &subtype, ""));
                        }
                    }
                    Event::End(_) => {
                        if depth == 0 {
                            break;
                        }
                        depth -= 1;
                    }
                    Event::Eof => {
                        return Err(RunError::ReportMalformed(format!(
                            "report ended inside testcase '{name}'"
                        )));
                    }
                    _ => {}
                }
            }
        }

        Ok(TestOutcome {
            passed: failure.is_none(),
            detail: failure.unwrap_or_default(),
            name,
            duration_secs,
        })
    }

    /// Consumes events until the end tag of the current element, gathering
    /// all nested text and CDATA content.
    fn collect_text_until_end(&mut self) -> Result<String, RunError> {
        let mut depth = 0usize;
        let mut text = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.read_event(&mut buf)? {
                Event::Start(_) => depth += 1,
                Event::Text(t) => {
                    let fragment = t.unescape().map_err(|e| {
                        RunError::ReportMalformed(format!("invalid text content: {e}"))
                    })?;
                    text.push_str(&fragment);
                }
                Event::CData(c) => {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
                Event::End(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Event::Eof => {
                    return Err(RunError::ReportMalformed(
                        "report ended inside a failure element".to_string(),
                    ));
                }
                _ => {}
            }
        }
        Ok(text)
    }

    fn read_event<'b>(&mut self, buf: &'b mut Vec<u8>) -> Result<Event<'b>, RunError> {
        self.reader
            .read_event_into(buf)
            .map_err(|e| RunError::ReportMalformed(format!("invalid XML in report: {e}")))
    }
}

impl Iterator for ReportCases {
    type Item = Result<TestOutcome, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let event = match self.read_event(&mut buf) {
                Ok(event) => event,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            match event {
                Event::Start(e) => {
                    let name = element_name(&e);
                    if !self.seen_root {
                        if name != "testsuites" {
                            self.done = true;
                            return Some(Err(RunError::ReportMalformed(format!(
                                "expected a <testsuites> root element, found <{name}>"
                            ))));
                        }
                        self.seen_root = true;
                        continue;
                    }
                    if name == "testcase" {
                        let start = e.to_owned();
                        let case = self.read_case(start, false);
                        if case.is_err() {
                            self.done = true;
                        }
                        return Some(case);
                    }
                    // Anything else is a suite or wrapper element; descend into it.
                }
                Event::Empty(e) => {
                    let name = element_name(&e);
                    if !self.seen_root {
                        if name != "testsuites" {
                            self.done = true;
                            return Some(Err(RunError::ReportMalformed(format!(
                                "expected a <testsuites> root element, found <{name}>"
                            ))));
                        }
                        // A self-closing root holds no test cases.
                        self.seen_root = true;
                        continue;
                    }
                    if name == "testcase" {
                        let start = e.to_owned();
                        let case = self.read_case(start, true);
                        if case.is_err() {
                            self.done = true;
                        }
                        return Some(case);
                    }
                }
                Event::Eof => {
                    self.done = true;
                    if !self.seen_root {
                        return Some(Err(RunError::ReportMalformed(
                            "report contains no <testsuites> root element".to_string(),
                        )));
                    }
                    return None;
                }
                _ => {}
            }
        }
    }
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn is_failure_kind(name: &str) -> bool {
    name == "failure" || name == "error"
}

/// Detail text format consumed by downstream result records.
/// 下游结果记录所使用的详情文本格式。
fn format_detail(kind: &str, subtype: &str, body: &str) -> String {
    format!("{kind} - Type: {subtype} - Details: {body}")
}

fn require_attr(el: &BytesStart<'_>, attr: &str) -> Result<String, RunError> {
    let element = element_name(el);
    match el.try_get_attribute(attr) {
        Ok(Some(a)) => a
            .unescape_value()
            .map(|v| v.into_owned())
            .map_err(|e| {
                RunError::ReportMalformed(format!(
                    "invalid '{attr}' attribute on <{element}>: {e}"
                ))
            }),
        Ok(None) => Err(RunError::ReportMalformed(format!(
            "<{element}> element is missing its '{attr}' attribute"
        ))),
        Err(e) => Err(RunError::ReportMalformed(format!(
            "invalid attributes on <{element}>: {e}"
        ))),
    }
}
