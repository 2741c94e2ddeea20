//! OpenAPI documentation for the Airport API Service

use utoipa::OpenApi;

use shared::models::Seat;
use shared::types::{PaginatedResponse, PaginationMeta};

use crate::error::{ErrorDetail, ErrorResponse};
use crate::handlers::{
    AirplaneList, AirplaneTypeList, AirportList, CrewList, CrewPositionList, ManufacturerList,
    RefreshRequest, RouteList, TokenRequest,
};
use crate::services::airplane::{
    Airplane, AirplaneDetail, AirplaneImage, AirplaneListItem, CreateAirplaneInput,
};
use crate::services::airplane_type::{
    AirplaneType, AirplaneTypeListItem, CreateAirplaneTypeInput,
};
use crate::services::airport::{Airport, CreateAirportInput};
use crate::services::auth::{AuthTokens, RegisterInput, UserProfile};
use crate::services::crew::{CreateCrewInput, CreateCrewPositionInput, Crew, CrewListItem, CrewPosition};
use crate::services::flight::{CreateFlightInput, Flight, FlightDetail, FlightListItem};
use crate::services::manufacturer::{AirplaneManufacturer, CreateManufacturerInput};
use crate::services::order::{
    CreateOrderInput, Order, OrderDetail, OrderFlight, OrderListItem, Ticket, TicketInput,
    TicketListItem,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Airport API Service",
        description = "REST API for airports, routes, airplanes, crew, flights and ticket orders"
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::user::register,
        crate::handlers::user::obtain_token,
        crate::handlers::user::refresh_token,
        crate::handlers::user::me,
        crate::handlers::airport::list_airports,
        crate::handlers::airport::create_airport,
        crate::handlers::route::list_routes,
        crate::handlers::route::create_route,
        crate::handlers::manufacturer::list_manufacturers,
        crate::handlers::manufacturer::create_manufacturer,
        crate::handlers::airplane_type::list_airplane_types,
        crate::handlers::airplane_type::create_airplane_type,
        crate::handlers::airplane::list_airplanes,
        crate::handlers::airplane::get_airplane,
        crate::handlers::airplane::create_airplane,
        crate::handlers::airplane::upload_airplane_image,
        crate::handlers::crew::list_crew_positions,
        crate::handlers::crew::create_crew_position,
        crate::handlers::crew::list_crew,
        crate::handlers::crew::create_crew,
        crate::handlers::flight::list_flights,
        crate::handlers::flight::get_flight,
        crate::handlers::flight::create_flight,
        crate::handlers::order::list_orders,
        crate::handlers::order::get_order,
        crate::handlers::order::create_order,
        crate::handlers::order::delete_order,
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        RegisterInput,
        TokenRequest,
        RefreshRequest,
        UserProfile,
        AuthTokens,
        Airport,
        CreateAirportInput,
        AirportList,
        crate::services::route::Route,
        crate::services::route::RouteListItem,
        crate::services::route::CreateRouteInput,
        RouteList,
        AirplaneManufacturer,
        CreateManufacturerInput,
        ManufacturerList,
        AirplaneType,
        AirplaneTypeListItem,
        CreateAirplaneTypeInput,
        AirplaneTypeList,
        Airplane,
        AirplaneListItem,
        AirplaneDetail,
        AirplaneImage,
        CreateAirplaneInput,
        AirplaneList,
        CrewPosition,
        CreateCrewPositionInput,
        CrewPositionList,
        Crew,
        CrewListItem,
        CreateCrewInput,
        CrewList,
        Flight,
        FlightListItem,
        FlightDetail,
        CreateFlightInput,
        Order,
        OrderListItem,
        OrderDetail,
        OrderFlight,
        Ticket,
        TicketInput,
        TicketListItem,
        CreateOrderInput,
        Seat,
        PaginationMeta,
        PaginatedResponse<FlightListItem>,
        PaginatedResponse<OrderListItem>,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "user", description = "Account registration and JWT tokens"),
        (name = "airports", description = "Airport catalog"),
        (name = "routes", description = "Source-destination airport pairs"),
        (name = "fleet", description = "Manufacturers, airplane types and airplanes"),
        (name = "crew", description = "Crew positions and crew members (staff only)"),
        (name = "flights", description = "Scheduled flights and search"),
        (name = "orders", description = "Ticket orders of the current user"),
    )
)]
pub struct ApiDoc;
