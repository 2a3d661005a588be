// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! The banner is drawn at its full extent and clipped to the part that is
//! on screen, so a negative offset slides it up under the top edge.

use super::animation::AnimatedFrame;
use super::layout::BannerLayout;
use crate::banner::BannerContent;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, typography};
use iced::font::Weight;
use iced::widget::image::Image;
use iced::widget::{container, text, Container, Stack, Text};
use iced::{alignment, Background, Color, Element, Font, Length, Padding, Rectangle, Theme};

/// Renders the attached banner, or nothing when detached or off screen.
pub fn view<'a, Message: 'a>(sink: &'a AnimatedFrame) -> Element<'a, Message> {
    let (Some(content), Some(layout)) = (sink.content(), sink.layout()) else {
        return empty();
    };

    let visible = sink.current().visible_height();
    if visible <= 0.0 {
        return empty();
    }

    let banner = compose(content, &layout, sink);

    Container::new(banner)
        .width(Length::Fill)
        .height(Length::Fixed(visible))
        .align_y(alignment::Vertical::Bottom)
        .clip(true)
        .into()
}

fn compose<'a, Message: 'a>(
    content: &'a BannerContent,
    layout: &BannerLayout,
    sink: &'a AnimatedFrame,
) -> Element<'a, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(layout.extent))
        .push(
            Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(background_style),
        );

    if let (Some(handle), Some(frame)) = (sink.image(), layout.image) {
        stack = stack.push(positioned(Image::new(handle.clone()), frame));
    }

    let title = Text::new(content.title_text())
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });
    stack = stack.push(positioned(title, layout.title));

    if let (Some(subtitle), Some(frame)) = (content.subtitle_text(), layout.subtitle) {
        let subtitle = Text::new(subtitle)
            .size(typography::SUBTITLE)
            .style(|theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity::OVERLAY_MEDIUM + opacity::OVERLAY_SUBTLE,
                    ..theme.palette().text
                }),
            });
        stack = stack.push(positioned(subtitle, frame));
    }

    stack
        .push(positioned(
            Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(indicator_style),
            layout.indicator,
        ))
        .push(positioned(
            Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(line_style),
            layout.line,
        ))
        .into()
}

/// Places `child` at `frame` inside a full-size stack layer.
fn positioned<'a, Message: 'a>(
    child: impl Into<Element<'a, Message>>,
    frame: Rectangle,
) -> Element<'a, Message> {
    let sized = Container::new(child)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .clip(true);

    Container::new(sized)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: frame.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: frame.x.max(0.0),
        })
        .into()
}

fn empty<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Style function for the banner surface.
fn background_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: iced::Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::BANNER,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dark mode, judged by the background luminance.
fn is_dark(theme: &Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

/// Style function for the drag indicator pill.
fn indicator_style(theme: &Theme) -> container::Style {
    let color = if is_dark(theme) {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    container::Style {
        background: Some(Background::Color(color)),
        border: iced::Border {
            radius: (sizing::INDICATOR_HEIGHT / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the bottom separator.
fn line_style(theme: &Theme) -> container::Style {
    let color = if is_dark(theme) {
        palette::GRAY_900
    } else {
        palette::GRAY_100
    };

    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}
