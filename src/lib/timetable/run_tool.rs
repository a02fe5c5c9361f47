use futures::future;
use log::info;

use super::{
    error::MutationError,
    fetcher::DataFetcher,
    models::{
        schedule_model::ScheduleEntry, teacher_model::Teacher, Command, Config, ScheduleCommand,
        TeachersCommand,
    },
    mutation::MutationHandler,
    notifier::Notifier,
    renderer::Page,
    transport::Transport,
    validation::Form,
};

pub fn group_query(group: Option<&str>) -> Vec<(String, String)> {
    group
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| vec![("group_name".to_owned(), g.to_owned())])
        .unwrap_or_default()
}

/// Performs `command` and returns the pages it rendered.
/// Fetch failures end up inside the pages, only mutations return an error.
pub async fn run<H: Transport, N: Notifier>(
    transport: &H,
    notifier: &N,
    config: &Config,
    command: &Command,
) -> Result<Vec<Page>, MutationError> {
    let fetcher = DataFetcher::new(transport, &config.api_base);
    let handler = MutationHandler::new(transport, notifier, &config.api_base);
    let schedule_page = |group: Option<&str>| {
        Page::with_query(group_query(group.or(config.default_group.as_deref())))
    };

    match command {
        Command::Teachers(TeachersCommand::List) => {
            let mut page = Page::new();
            fetcher.load::<Teacher>(&mut page).await;
            Ok(vec![page])
        }
        Command::Teachers(TeachersCommand::Add { name }) => {
            let mut form = Form::from_pairs(name.iter().map(|n| ("name", n.as_str())));
            let mut page = Page::new();
            handler.create::<Teacher>(&mut form, &mut page).await?;
            Ok(vec![page])
        }
        Command::Schedule(ScheduleCommand::List { group }) => {
            let mut page = schedule_page(group.as_deref());
            fetcher.load::<ScheduleEntry>(&mut page).await;
            Ok(vec![page])
        }
        Command::Schedule(ScheduleCommand::Add(entry)) => {
            let mut form = entry.to_form();
            let mut page = schedule_page(None);
            handler.create::<ScheduleEntry>(&mut form, &mut page).await?;
            Ok(vec![page])
        }
        Command::Schedule(ScheduleCommand::Delete { id, .. }) => {
            let mut page = schedule_page(None);
            handler.delete::<ScheduleEntry>(*id, &mut page).await?;
            /* a declined confirmation leaves the page unrendered */
            Ok(if page.columns.is_empty() {
                vec![]
            } else {
                vec![page]
            })
        }
        Command::Overview { group } => {
            /* both lists load concurrently, each into its own page */
            let mut teachers = Page::new();
            let mut schedule = schedule_page(group.as_deref());
            future::join(
                fetcher.load::<Teacher>(&mut teachers),
                fetcher.load::<ScheduleEntry>(&mut schedule),
            )
            .await;
            info!(
                "Overview has {} teacher(s) and {} entry(ies)",
                teachers.data_rows(),
                schedule.data_rows()
            );
            Ok(vec![teachers, schedule])
        }
    }
}
