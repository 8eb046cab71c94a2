use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::input;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BUTTON_HEIGHT, Header, ResponsePane, SubmitButton, TitleBar};

const BUTTON_WIDTH: u16 = 22;
const SIDE_MARGIN: u16 = 2;

/// Splits the body into the input pane and, when a response is showing,
/// the response pane on the right half.
pub fn body_areas(body: Rect, response_visible: bool) -> (Rect, Option<Rect>) {
    if response_visible {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);
        (left, Some(right))
    } else {
        (body, None)
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(
        tui.backend_url.clone(),
        app.status_message.clone(),
        app.is_loading(),
    )
    .render(frame, title_area);

    let (left, right) = body_areas(body_area, app.response_visible);
    draw_input_pane(frame, left, app, tui, spinner_frame);

    if let Some(right) = right {
        ResponsePane::new(&mut tui.response_pane, &app.response_text, app.completions)
            .render(frame, right);
    }
}

fn draw_input_pane(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::Length;

    let [column] = Layout::horizontal([Constraint::Min(0)])
        .horizontal_margin(SIDE_MARGIN)
        .areas(area);

    tui.input_box.loading = app.is_loading();
    tui.input_box.kind = input::classify(&app.input_text);

    let header_height = Header::required_height(column.width);
    let input_height = tui.input_box.calculate_height(column.width);

    let [header_area, _, input_area, _, button_row] = Layout::vertical([
        Length(header_height),
        Length(1),
        Length(input_height),
        Length(1),
        Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    Header.render(frame, header_area);
    tui.input_box.render(frame, input_area);

    let [button_area] = Layout::horizontal([Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .areas(button_row);
    SubmitButton {
        loading: app.is_loading(),
        enabled: app.can_submit(),
        spinner_frame,
    }
    .render(frame, button_area);
}
