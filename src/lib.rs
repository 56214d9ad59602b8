pub mod shared {
    pub mod core {
        pub mod datetime_parser;
    }
}

pub mod modules {
    pub mod appointments {
        pub mod core {
            pub mod appointment;
            pub mod projections;
        }
        pub mod use_cases {
            pub mod create_appointment {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_appointments_by_user {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod appointment_store;
                pub mod appointment_store_in_memory;
            }
        }
    }
}

pub mod shell;
