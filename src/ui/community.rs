// SPDX-License-Identifier: MPL-2.0
//! Community hub: headline stats and the Forums / Events / Surveys tabs.

use crate::domain::community::{
    filter_posts, initials, survey_progress, Event as CommunityEvent, ForumPost, Survey, Topic,
    EVENTS, FORUM_POSTS, POPULAR_TOPICS, STATS, SURVEYS,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{self, BOLD, SEMIBOLD};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Forums,
    Events,
    Surveys,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Forums, Tab::Events, Tab::Surveys];

    fn label_key(self) -> &'static str {
        match self {
            Tab::Forums => "community-tab-forums",
            Tab::Events => "community-tab-events",
            Tab::Surveys => "community-tab-surveys",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    tab: Tab,
    search: String,
}

impl State {
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Posts matching the current search.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&'static ForumPost> {
        filter_posts(&FORUM_POSTS, &self.search)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    SearchChanged(String),
    StartDiscussion,
    CreateEvent,
    JoinEvent(&'static str),
    CreateSurvey,
    Participate(&'static str),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message) -> Event {
    let notification = match message {
        Message::SelectTab(tab) => {
            state.tab = tab;
            return Event::None;
        }
        Message::SearchChanged(query) => {
            state.search = query;
            return Event::None;
        }
        Message::StartDiscussion => Notification::info("community-start-discussion-title")
            .with_detail("community-coming-soon-detail"),
        Message::CreateEvent => Notification::info("community-create-event-title")
            .with_detail("community-coming-soon-detail"),
        Message::JoinEvent(title) => Notification::success("community-join-title")
            .with_detail("community-join-detail")
            .with_arg("event", title),
        Message::CreateSurvey => Notification::info("community-create-survey-title")
            .with_detail("community-coming-soon-detail"),
        Message::Participate(title) => Notification::info("community-participate-title")
            .with_detail("community-participate-detail")
            .with_arg("survey", title),
    };
    Event::Notify(notification)
}

#[must_use]
pub fn topic_color(topic: Topic) -> Color {
    match topic {
        Topic::Transportation => palette::NAVY_500,
        Topic::Environment => palette::GREEN_600,
        Topic::Safety => palette::ERROR_500,
        Topic::Government => palette::PURPLE_600,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let tab_content = match ctx.state.tab {
        Tab::Forums => build_forums(&ctx),
        Tab::Events => build_events(i18n),
        Tab::Surveys => build_surveys(i18n),
    };

    layout::page(
        Column::new()
            .spacing(spacing::LG)
            .push(layout::page_heading(
                i18n.tr("community-title"),
                i18n.tr("community-lead"),
            ))
            .push(build_stats(i18n))
            .push(build_tabs(i18n, ctx.state.tab))
            .push(tab_content),
    )
}

fn build_stats<'a>(i18n: &I18n) -> Element<'a, Message> {
    let glyphs = ["👥", "💬", "📅", "📈"];
    let colors = [
        palette::NAVY_500,
        palette::GREEN_600,
        palette::PURPLE_600,
        palette::ORANGE_600,
    ];
    let cards = STATS
        .iter()
        .zip(glyphs.into_iter().zip(colors))
        .map(|((value, label_key), (glyph, color))| -> Element<'a, Message> {
            layout::card(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(layout::colored(glyph.to_string(), typography::TITLE_MD, color))
                    .push(Text::new(*value).size(typography::TITLE_LG).font(BOLD))
                    .push(layout::muted(i18n.tr(label_key), typography::BODY_SM)),
            )
            .into()
        })
        .collect();

    layout::grid(cards, 4)
}

fn build_tabs<'a>(i18n: &I18n, active: Tab) -> Element<'a, Message> {
    let tabs = Tab::ALL.into_iter().map(|tab| -> Element<'a, Message> {
        let style = if tab == active {
            styles::button::tab_selected
        } else {
            styles::button::tab_unselected
        };
        button(
            Container::new(Text::new(i18n.tr(tab.label_key())))
                .center_x(Length::Fill),
        )
        .on_press(Message::SelectTab(tab))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(style)
        .into()
    });

    Row::with_children(tabs).spacing(spacing::XS).into()
}

fn section_bar<'a>(title: String, action: String, on_press: Message) -> Element<'a, Message> {
    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_MD).font(BOLD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(format!("＋ {action}")))
                .on_press(on_press)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .into()
}

fn build_forums<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let search = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            text_input(&i18n.tr("community-search-placeholder"), ctx.state.search())
                .on_input(Message::SearchChanged)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(format!("＋ {}", i18n.tr("community-start-discussion"))))
                .on_press(Message::StartDiscussion)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let posts = ctx.state.visible_posts();
    let mut list = Column::new().spacing(spacing::MD);
    if posts.is_empty() {
        list = list.push(layout::card(layout::muted(
            i18n.tr("community-no-results"),
            typography::BODY,
        )));
    }
    for post in posts {
        list = list.push(build_post(i18n, post));
    }

    let mut topics = Column::new()
        .spacing(spacing::SM)
        .push(layout::title(i18n.tr("community-popular-title")));
    for (topic, count) in POPULAR_TOPICS {
        topics = topics.push(
            Row::new()
                .align_y(Vertical::Center)
                .push(layout::badge(i18n.tr(topic.label_key()), topic_color(topic)))
                .push(Space::new().width(Length::Fill))
                .push(layout::muted(count.to_string(), typography::BODY_SM)),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(search)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(Container::new(list).width(Length::FillPortion(2)))
                .push(
                    Container::new(layout::card(topics)).width(Length::FillPortion(1)),
                ),
        )
        .into()
}

fn build_post<'a>(i18n: &I18n, post: &'static ForumPost) -> Element<'a, Message> {
    let avatar = Container::new(
        Text::new(initials(post.author))
            .size(typography::BODY_SM)
            .font(BOLD),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::avatar);

    let mut heading = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(post.title).size(typography::BODY_LG).font(SEMIBOLD))
                .width(Length::Fill),
        );
    if post.hot {
        heading = heading.push(layout::badge_solid(
            format!("🔥 {}", i18n.tr("community-hot")),
            palette::ERROR_500,
        ));
    }

    let meta = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(layout::muted(post.author.to_string(), typography::BODY_SM))
        .push(layout::badge(
            i18n.tr(post.topic.label_key()),
            topic_color(post.topic),
        ))
        .push(layout::muted(format!("💬 {}", post.replies), typography::BODY_SM))
        .push(layout::muted(format!("👍 {}", post.likes), typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(layout::muted(post.posted.to_string(), typography::CAPTION));

    layout::card(
        Row::new()
            .spacing(spacing::MD)
            .push(avatar)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(heading)
                    .push(meta),
            ),
    )
    .padding(spacing::MD)
    .into()
}

fn build_events<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = EVENTS
        .iter()
        .map(|event| build_event(i18n, event))
        .collect();

    Column::new()
        .spacing(spacing::MD)
        .push(section_bar(
            i18n.tr("community-events-title"),
            i18n.tr("community-create-event"),
            Message::CreateEvent,
        ))
        .push(layout::grid(cards, 3))
        .into()
}

fn build_event<'a>(i18n: &I18n, event: &CommunityEvent) -> Element<'a, Message> {
    let detail = |glyph: &str, value: String| -> Element<'a, Message> {
        layout::muted(format!("{glyph} {value}"), typography::BODY_SM).into()
    };
    let attending = i18n.tr_count("community-attending", event.attendees as usize);

    layout::card(
        Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Container::new(layout::title(event.title.to_string())).width(Length::Fill))
                    .push(layout::badge(
                        i18n.tr(event.topic.label_key()),
                        topic_color(event.topic),
                    )),
            )
            .push(detail("📅", event.date.to_string()))
            .push(detail("🕑", event.time.to_string()))
            .push(detail("📍", event.location.to_string()))
            .push(detail("👥", attending))
            .push(
                button(
                    Container::new(Text::new(i18n.tr("community-join-event")))
                        .center_x(Length::Fill),
                )
                .on_press(Message::JoinEvent(event.title))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::accent),
            ),
    )
    .into()
}

fn build_surveys<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = SURVEYS
        .iter()
        .map(|survey| build_survey(i18n, survey))
        .collect();

    Column::new()
        .spacing(spacing::MD)
        .push(section_bar(
            i18n.tr("community-surveys-title"),
            i18n.tr("community-create-survey"),
            Message::CreateSurvey,
        ))
        .push(layout::grid(cards, 2))
        .into()
}

fn build_survey<'a>(i18n: &I18n, survey: &Survey) -> Element<'a, Message> {
    let responses = i18n.tr_count("community-responses", survey.responses as usize);
    let deadline = i18n.tr_with_args("community-deadline", &[("date", survey.deadline)]);

    layout::card(
        Column::new()
            .spacing(spacing::SM)
            .push(layout::title(survey.title.to_string()))
            .push(layout::muted(survey.description.to_string(), typography::BODY_SM))
            .push(
                Row::new()
                    .push(layout::muted(responses, typography::BODY_SM))
                    .push(Space::new().width(Length::Fill))
                    .push(layout::muted(deadline, typography::BODY_SM)),
            )
            .push(layout::progress_bar(survey_progress(survey.responses)))
            .push(
                button(
                    Container::new(Text::new(i18n.tr("community-participate")))
                        .center_x(Length::Fill),
                )
                .on_press(Message::Participate(survey.title))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::primary),
            ),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_forums() {
        assert_eq!(State::default().tab(), Tab::Forums);
    }

    #[test]
    fn every_tab_renders() {
        let i18n = I18n::default();
        for tab in Tab::ALL {
            let mut state = State::default();
            update(&mut state, Message::SelectTab(tab));
            assert_eq!(state.tab(), tab);
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
            });
        }
    }

    #[test]
    fn search_narrows_visible_posts() {
        let mut state = State::default();
        assert_eq!(state.visible_posts().len(), FORUM_POSTS.len());

        update(&mut state, Message::SearchChanged("bike".into()));
        let posts = state.visible_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "Sarah Chen");
    }

    #[test]
    fn search_without_matches_renders_empty_state() {
        let i18n = I18n::default();
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("nothing like this".into()));
        assert!(state.visible_posts().is_empty());
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }

    #[test]
    fn join_event_names_the_event() {
        let mut state = State::default();
        match update(&mut state, Message::JoinEvent("Town Hall Meeting")) {
            Event::Notify(n) => {
                assert_eq!(n.title_key(), "community-join-title");
                assert_eq!(
                    n.args(),
                    &[("event".to_string(), "Town Hall Meeting".to_string())]
                );
            }
            other => panic!("expected a toast, got {other:?}"),
        }
    }

    #[test]
    fn join_toast_text_mentions_event() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("community-join-detail", &[("event", "Town Hall Meeting")]);
        assert!(text.contains("Town Hall Meeting"));
    }

    #[test]
    fn creation_buttons_show_info_toasts() {
        let mut state = State::default();
        for message in [
            Message::StartDiscussion,
            Message::CreateEvent,
            Message::CreateSurvey,
        ] {
            match update(&mut state, message) {
                Event::Notify(n) => {
                    assert_eq!(n.severity(), crate::ui::notifications::Severity::Info);
                }
                other => panic!("expected a toast, got {other:?}"),
            }
        }
    }

    #[test]
    fn topic_colors_are_distinct() {
        let colors: Vec<_> = POPULAR_TOPICS.iter().map(|(t, _)| topic_color(*t)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
