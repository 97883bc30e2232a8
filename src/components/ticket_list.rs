use yew::prelude::*;

use crate::models::Ticket;

#[derive(Properties, PartialEq)]
pub struct TicketListProps {
    pub title: AttrValue,
    pub tickets: Vec<Ticket>,
    pub on_report: Callback<Ticket>,
}

#[function_component(TicketList)]
pub fn ticket_list(props: &TicketListProps) -> Html {
    html! {
        <div class="tickets-view">
            <h2 class="tickets-title">{props.title.clone()}</h2>

            <div class="tickets-list">
                { for props.tickets.iter().map(|ticket| {
                    let on_click = {
                        let ticket = ticket.clone();
                        props.on_report.reform(move |_: MouseEvent| ticket.clone())
                    };
                    html! {
                        <div key={ticket.id.clone()} class="ticket-card">
                            <div class="ticket-header">
                                <div class="ticket-header-left">
                                    <span class={classes!("priority-badge", ticket.priority.css_class())}>
                                        {ticket.priority.label()}
                                    </span>
                                    <h3 class="ticket-title">{ticket.title.clone()}</h3>
                                </div>
                                <span class="ticket-status">{ticket.status.label()}</span>
                            </div>

                            <p class="ticket-description">{ticket.description.clone()}</p>

                            <div class="ticket-actions">
                                <button class="btn-report" onclick={on_click}>
                                    {"Hacer reporte"}
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
