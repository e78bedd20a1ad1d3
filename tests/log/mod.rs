mod show_log_from_detached_head;
mod show_log_with_multiple_commits;
