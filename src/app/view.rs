use super::messages::Message;
use super::state::{
    App, CARD_MAX_WIDTH_PX, PROGRESS_BAR_HEIGHT_PX, SECTION_SPACING_PX, StepStatus,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, button, column, container, horizontal_space, progress_bar, row, scrollable, text,
};
use iced::{Background, Border, Color, Element, Font, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut card: Column<'_, Message> = column![self.header()]
            .spacing(SECTION_SPACING_PX)
            .width(Length::Fill);

        if self.timer.is_running() {
            card = card.push(self.timer_panel());
        }
        if self.session.is_active() {
            card = card.push(self.progress_panel());
        }

        card = card.push(self.action_buttons());

        if self.toggles.show_ingredients {
            card = card.push(self.ingredients_section());
        }
        if self.toggles.show_steps {
            card = card.push(self.steps_section());
        }

        card = card.push(self.cooking_controls());

        let page = column![
            text("Interactive Recipe Collection")
                .size(self.config.text_size as f32 * 2.0)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            container(card)
                .padding(24)
                .max_width(CARD_MAX_WIDTH_PX)
                .style(container::rounded_box),
        ]
        .spacing(SECTION_SPACING_PX)
        .align_x(Horizontal::Center)
        .padding(16)
        .width(Length::Fill);

        scrollable(page).height(Length::Fill).into()
    }
}

impl App {
    fn header(&self) -> Element<'_, Message> {
        let theme_label = if self.is_night() {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let badges = row![
            badge(format!("Total {}", self.recipe.total_time)),
            badge(format!("Prep {}", self.recipe.prep_time)),
            badge(format!("Cook {}", self.recipe.cook_time)),
            badge(self.recipe.servings_label()),
            badge(self.recipe.difficulty.clone()),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        column![
            row![
                horizontal_space(),
                button(theme_label)
                    .style(button::text)
                    .on_press(Message::ToggleTheme),
            ],
            text(&self.recipe.title)
                .size(self.config.text_size as f32 * 2.25)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            text(&self.recipe.image)
                .size(self.config.text_size as f32 * 0.75)
                .wrapping(Wrapping::Glyph)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            container(badges).center_x(Length::Fill),
        ]
        .spacing(8)
        .into()
    }

    fn timer_panel(&self) -> Element<'_, Message> {
        let accent = self.theme().timer_color();
        container(
            column![
                text("Time Remaining").size(self.config.text_size as f32 * 0.875),
                text(self.timer.label())
                    .size(self.config.text_size as f32 * 1.75)
                    .font(Font::MONOSPACE)
                    .color(accent),
            ]
            .spacing(4)
            .align_x(Horizontal::Center),
        )
        .padding(12)
        .center_x(Length::Fill)
        .style(move |_theme: &iced::Theme| panel_style(accent.scale_alpha(0.12), accent))
        .into()
    }

    fn progress_panel(&self) -> Element<'_, Message> {
        let percentage = self.progress_percentage();
        column![
            row![
                text("Cooking Progress"),
                horizontal_space(),
                text(format!("{}%", percentage.round() as u32)),
            ],
            progress_bar(0.0..=100.0, percentage).height(PROGRESS_BAR_HEIGHT_PX),
        ]
        .spacing(6)
        .into()
    }

    fn action_buttons(&self) -> Element<'_, Message> {
        let ingredients_label = if self.toggles.show_ingredients {
            "Hide Ingredients"
        } else {
            "Show Ingredients"
        };
        let steps_label = if self.toggles.show_steps {
            "Hide Steps"
        } else {
            "Show Steps"
        };
        container(
            row![
                button(ingredients_label)
                    .style(button::secondary)
                    .on_press(Message::ToggleIngredients),
                button(steps_label)
                    .style(button::secondary)
                    .on_press(Message::ToggleSteps),
                button("Print Recipe")
                    .style(button::secondary)
                    .on_press(Message::Print),
            ]
            .spacing(12),
        )
        .center_x(Length::Fill)
        .into()
    }

    fn ingredients_section(&self) -> Element<'_, Message> {
        let items = self.recipe.ingredients.iter().map(|ingredient| {
            text(format!("•  {ingredient}"))
                .size(self.config.text_size)
                .into()
        });
        let accent = Color::from_rgb8(0x3b, 0x82, 0xf6);
        container(
            column![
                text("Ingredients").size(self.config.text_size as f32 * 1.25),
                Column::with_children(items).spacing(6),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme: &iced::Theme| panel_style(accent.scale_alpha(0.08), accent))
        .into()
    }

    fn steps_section(&self) -> Element<'_, Message> {
        let theme = self.theme();
        let steps = self.recipe.steps.iter().enumerate().map(|(idx, step)| {
            let status = self.session.step_status(idx);
            let (background, border) = match status {
                StepStatus::Current => {
                    let color = theme.current_step_color();
                    (color, Color::from_rgb8(0xfa, 0xcc, 0x15))
                }
                StepStatus::Done => {
                    let color = theme.done_step_color();
                    (color, Color::from_rgb8(0x4a, 0xde, 0x80))
                }
                StepStatus::Pending => (Color::TRANSPARENT, Color::from_rgb8(0xd1, 0xd5, 0xdb)),
            };
            container(
                row![
                    text(format!("{}.", idx + 1))
                        .size(self.config.text_size)
                        .font(Font::MONOSPACE),
                    text(step)
                        .size(self.config.text_size)
                        .wrapping(Wrapping::Word)
                        .width(Length::Fill),
                ]
                .spacing(12)
                .align_y(Vertical::Top),
            )
            .padding(12)
            .width(Length::Fill)
            .style(move |_theme: &iced::Theme| panel_style(background, border))
            .into()
        });
        let accent = Color::from_rgb8(0x22, 0xc5, 0x5e);
        container(
            column![
                text("Instructions").size(self.config.text_size as f32 * 1.25),
                Column::with_children(steps).spacing(10),
            ]
            .spacing(12),
        )
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme: &iced::Theme| panel_style(accent.scale_alpha(0.08), accent))
        .into()
    }

    fn cooking_controls(&self) -> Element<'_, Message> {
        let controls = if self.session.is_active() {
            let next = if self.session.is_at_last_step(self.step_count()) {
                button("Next Step").style(button::success)
            } else {
                button("Next Step")
                    .style(button::success)
                    .on_press(Message::NextStep)
            };
            row![
                next,
                button("Reset")
                    .style(button::danger)
                    .on_press(Message::ResetCooking),
            ]
            .spacing(12)
        } else {
            row![
                button(text("Start Cooking").size(self.config.text_size as f32 * 1.125))
                    .padding([10, 28])
                    .style(button::primary)
                    .on_press(Message::StartCooking)
            ]
        };
        container(controls).center_x(Length::Fill).into()
    }
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(14))
        .padding([4, 10])
        .style(container::rounded_box)
        .into()
}

fn panel_style(background: Color, border: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
