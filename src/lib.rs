pub mod shared {
    pub mod infrastructure {
        pub mod postgres;
        pub mod store;
    }
}

pub mod modules {
    pub mod parking {
        pub mod core {
            pub mod events;
            pub mod parking_spot;
            pub mod vehicle;
            pub mod verification;
        }
        pub mod use_cases {
            pub mod check_in {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod check_out {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_free_spots {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod get_vehicle {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod parking_event_store;
                pub mod parking_spot_store;
                pub mod vehicle_store;
                pub mod vehicle_verification;
            }
        }
    }
}

pub mod shell;
