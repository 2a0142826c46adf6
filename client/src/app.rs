//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{admin_layout::AdminLayout, messenger_popup::MessengerPopup, navbar::Navbar};
use crate::pages::admin::{
    content::ContentModerationPage, courses::CourseManagementPage, dashboard::AdminDashboardPage,
    messages::MessagingManagementPage, projects::ProjectManagementPage, roles::RoleManagementPage,
    settings::SystemSettingsPage, users::UserManagementPage,
};
use crate::pages::{
    create_project::CreateProjectPage, create_topic::CreateTopicPage, forum::ForumPage, home::HomePage,
    login::LoginPage, profile::ProfilePage, project_details::ProjectDetailsPage, projects::ProjectsPage,
    register::RegisterPage, resource_detail::ResourceDetailPage, resources::ResourcesPage,
    topic_detail::TopicDetailPage,
};
use crate::state::{auth::AuthState, messenger::MessengerState, theme::ThemeState};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, theme and messenger contexts and sets up routing.
/// The session starts in the loading state and is restored from local
/// storage once the app is running in the browser, so route guards never
/// redirect during server rendering.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let auth = RwSignal::new(AuthState::pending(storage.clone()));
    let theme = RwSignal::new(ThemeState::from_preference(storage));
    let messenger = RwSignal::new(MessengerState::default());

    provide_context(auth);
    provide_context(theme);
    provide_context(messenger);

    // Effects only run on the client.
    Effect::new(move || {
        if auth.with_untracked(|a| a.loading) {
            auth.update(AuthState::restore_session);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cyber-net.css"/>
        <Title text="CYBER_NET"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }.into_view()>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("users") view=UserManagementPage/>
                    <Route path=StaticSegment("projects") view=ProjectManagementPage/>
                    <Route path=StaticSegment("posts") view=ContentModerationPage/>
                    <Route path=StaticSegment("courses") view=CourseManagementPage/>
                    <Route path=StaticSegment("messages") view=MessagingManagementPage/>
                    <Route path=StaticSegment("roles") view=RoleManagementPage/>
                    <Route path=StaticSegment("settings") view=SystemSettingsPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forum") view=ForumPage/>
                    <Route path=(StaticSegment("forum"), StaticSegment("create")) view=CreateTopicPage/>
                    <Route path=(StaticSegment("forum"), ParamSegment("id")) view=TopicDetailPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), StaticSegment("create")) view=CreateProjectPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailsPage/>
                    <Route path=StaticSegment("resources") view=ResourcesPage/>
                    <Route path=(StaticSegment("resources"), ParamSegment("id")) view=ResourceDetailPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navbar, routed page and the floating messenger.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="main-layout">
            <Navbar/>
            <main class="main-layout__content">
                <div class="main-layout__inner">
                    <Outlet/>
                </div>
            </main>
            <MessengerPopup/>
        </div>
    }
}
