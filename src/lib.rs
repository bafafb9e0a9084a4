pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod inbound {
        pub mod api_error;
        pub mod responses;
    }
    pub mod infrastructure {
        pub mod user_store;
    }
}

pub mod modules {
    pub mod timeclock {
        pub mod core {
            pub mod calendar;
            pub mod clock_event;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
            pub mod violations;
        }
        pub mod use_cases {
            pub mod record_clock_in {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_clock_out {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_day_entries {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_work_hours {
                pub mod aggregate;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod application {
            pub mod handler;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }

    pub mod accounts {
        pub mod core {
            pub mod password;
            pub mod token;
            pub mod user;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod authenticate {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod auth;
            }
        }
    }
}

pub mod shell;
