//! RSS 2.0 rendering.

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::FeedError;
use crate::post::BlogPost;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Channel-level feed fields.
pub(crate) struct Channel<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub description: &'a str,
    pub language: &'a str,
    pub self_link: &'a str,
    pub updated: DateTime<Utc>,
}

/// Render posts as an RSS 2.0 document.
pub(crate) fn render(channel: &Channel<'_>, posts: &[BlogPost]) -> Result<String, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:atom", ATOM_NS));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text_element(&mut writer, "title", channel.title)?;
    text_element(&mut writer, "link", channel.link)?;
    text_element(&mut writer, "description", channel.description)?;
    text_element(&mut writer, "lastBuildDate", &rfc822(channel.updated))?;
    text_element(&mut writer, "language", channel.language)?;

    let mut atom_link = BytesStart::new("atom:link");
    atom_link.push_attribute(("href", channel.self_link));
    atom_link.push_attribute(("rel", "self"));
    atom_link.push_attribute(("type", "application/rss+xml"));
    writer.write_event(Event::Empty(atom_link))?;

    for post in posts {
        writer.write_event(Event::Start(BytesStart::new("item")))?;
        text_element(&mut writer, "title", &post.title)?;
        text_element(&mut writer, "link", &post.link)?;
        text_element(&mut writer, "guid", &post.link)?;
        text_element(&mut writer, "pubDate", &rfc822(post.date))?;
        text_element(&mut writer, "description", &post.description)?;
        writer.write_event(Event::End(BytesEnd::new("item")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// RFC 822 date in the GMT form feed readers expect.
fn rfc822(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
