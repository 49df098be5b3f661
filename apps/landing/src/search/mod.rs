// Search flow: the controller owns the request lifecycle around one router call
// and hands the decoded report to the renderer. Handlers expose it over HTTP.

pub mod controller;
pub mod handlers;
