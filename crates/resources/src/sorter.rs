use crate::error::ResourceError;
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesStart, Event},
};

const STRING_TAG: &[u8] = b"string";
const NAME_ATTR: &str = "name";

/// A direct child of the root element, kept as its raw event span.
#[derive(Debug)]
struct Node<'a> {
    events: Vec<Event<'a>>,
    /// `name` of a `<string>` element; `None` for every other child.
    key: Option<String>,
}

#[derive(Debug)]
enum Item<'a> {
    /// Text between children (usually indentation).
    Gap(Event<'a>),
    Node(Node<'a>),
}

#[derive(Debug)]
struct Document<'a> {
    prologue: Vec<Event<'a>>,
    root_start: Event<'a>,
    children: Vec<Item<'a>>,
    root_end: Option<Event<'a>>,
    epilogue: Vec<Event<'a>>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Prologue,
    Root,
    Epilogue,
}

/// Returns `xml` with the root's `<string>` children sorted by `name`.
///
/// Non-string children keep their relative order and are placed first,
/// followed by the sorted strings. Text between children stays at its
/// position so indentation is unaffected. The output always starts with a
/// UTF-8 XML declaration.
pub fn sort_document(xml: &str) -> Result<String, ResourceError> {
    let mut doc = Document::parse(xml)?;
    doc.children = reorder(std::mem::take(&mut doc.children));
    doc.write()
}

/// True when `sort_document` would not move any child.
pub fn is_sorted(xml: &str) -> Result<bool, ResourceError> {
    let doc = Document::parse(xml)?;
    let mut seen_string = false;
    let mut last_key: Option<&str> = None;

    for item in &doc.children {
        let Item::Node(node) = item else { continue };
        match node.key.as_deref() {
            None if seen_string => return Ok(false),
            None => {}
            Some(key) => {
                if last_key.is_some_and(|last| last > key) {
                    return Ok(false);
                }
                seen_string = true;
                last_key = Some(key);
            }
        }
    }
    Ok(true)
}

impl<'a> Document<'a> {
    fn parse(xml: &'a str) -> Result<Self, ResourceError> {
        let mut reader = Reader::from_str(xml);

        let mut phase = Phase::Prologue;
        let mut prologue = Vec::new();
        let mut root_start = None;
        let mut children = Vec::new();
        let mut root_end = None;
        let mut epilogue = Vec::new();

        // Child element currently being collected and its nesting depth.
        let mut current: Option<Node<'a>> = None;
        let mut depth = 0usize;

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader.read_event().map_err(|e| ResourceError::Xml {
                position,
                message: e.to_string(),
            })?;

            match phase {
                Phase::Prologue => match event {
                    Event::Eof => return Err(ResourceError::MissingRoot),
                    // Replaced by our own declaration on write.
                    Event::Decl(_) => {}
                    Event::Text(ref t) if t.iter().all(u8::is_ascii_whitespace) => {}
                    Event::Start(_) => {
                        root_start = Some(event);
                        phase = Phase::Root;
                    }
                    Event::Empty(_) => {
                        root_start = Some(event);
                        phase = Phase::Epilogue;
                    }
                    other => prologue.push(other),
                },
                Phase::Root => {
                    if let Some(node) = current.as_mut() {
                        match &event {
                            Event::Start(_) => depth += 1,
                            Event::End(_) => depth -= 1,
                            Event::Eof => return Err(unexpected_eof(position)),
                            _ => {}
                        }
                        node.events.push(event);
                        if depth == 0 {
                            children.extend(current.take().map(Item::Node));
                        }
                        continue;
                    }

                    match event {
                        Event::Start(ref e) => {
                            let key = string_key(e, position)?;
                            current = Some(Node {
                                events: vec![event],
                                key,
                            });
                            depth = 1;
                        }
                        Event::Empty(ref e) => {
                            let key = string_key(e, position)?;
                            children.push(Item::Node(Node {
                                events: vec![event],
                                key,
                            }));
                        }
                        Event::Text(_) => children.push(Item::Gap(event)),
                        Event::End(_) => {
                            root_end = Some(event);
                            phase = Phase::Epilogue;
                        }
                        Event::Eof => return Err(unexpected_eof(position)),
                        other => children.push(Item::Node(Node {
                            events: vec![other],
                            key: None,
                        })),
                    }
                }
                Phase::Epilogue => match event {
                    Event::Eof => break,
                    other => epilogue.push(other),
                },
            }
        }

        Ok(Document {
            prologue,
            root_start: root_start.ok_or(ResourceError::MissingRoot)?,
            children,
            root_end,
            epilogue,
        })
    }

    fn write(self) -> Result<String, ResourceError> {
        let mut writer = Writer::new(Vec::new());

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
        )?;
        writer.get_mut().push(b'\n');

        for event in self.prologue {
            write_event(&mut writer, event)?;
            writer.get_mut().push(b'\n');
        }

        write_event(&mut writer, self.root_start)?;
        for item in self.children {
            match item {
                Item::Gap(event) => write_event(&mut writer, event)?,
                Item::Node(node) => {
                    for event in node.events {
                        write_event(&mut writer, event)?;
                    }
                }
            }
        }
        if let Some(end) = self.root_end {
            write_event(&mut writer, end)?;
        }
        for event in self.epilogue {
            write_event(&mut writer, event)?;
        }

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

/// Puts non-string nodes first and sorted strings after them, reusing the
/// existing gaps in order.
fn reorder(children: Vec<Item<'_>>) -> Vec<Item<'_>> {
    let mut layout = Vec::with_capacity(children.len());
    let mut others = Vec::new();
    let mut strings = Vec::new();

    for item in children {
        match item {
            Item::Gap(event) => layout.push(Some(event)),
            Item::Node(node) => {
                layout.push(None);
                if node.key.is_some() {
                    strings.push(node);
                } else {
                    others.push(node);
                }
            }
        }
    }

    // Stable, so equal names keep their document order.
    strings.sort_by(|a, b| a.key.cmp(&b.key));
    let mut nodes = others.into_iter().chain(strings);

    layout
        .into_iter()
        .filter_map(|slot| match slot {
            Some(gap) => Some(Item::Gap(gap)),
            None => nodes.next().map(Item::Node),
        })
        .collect()
}

fn string_key(start: &BytesStart<'_>, position: u64) -> Result<Option<String>, ResourceError> {
    if start.name().as_ref() != STRING_TAG {
        return Ok(None);
    }

    let attr = start
        .try_get_attribute(NAME_ATTR)
        .map_err(|e| ResourceError::Xml {
            position,
            message: e.to_string(),
        })?
        .ok_or(ResourceError::MissingName(position))?;

    let value = attr.unescape_value().map_err(|e| ResourceError::Xml {
        position,
        message: e.to_string(),
    })?;
    Ok(Some(value.into_owned()))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ResourceError> {
    writer
        .write_event(event)
        .map_err(|e| ResourceError::Write(e.to_string()))
}

fn unexpected_eof(position: u64) -> ResourceError {
    ResourceError::Xml {
        position,
        message: "unexpected end of document inside the root element".to_string(),
    }
}
