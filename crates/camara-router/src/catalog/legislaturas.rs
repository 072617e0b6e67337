//! Legislaturas: períodos de mandato e cargos de direção da Câmara.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/legislaturas",
        upstream_path: "legislaturas",
        category: "Legislaturas",
        description: "Lista os períodos de mandatos e atividades parlamentares da Câmara.",
        path_params: &[],
        query_params: &[QueryParam::int("id"), QueryParam::text("data")],
    },
    Route {
        path: "/legislaturas/{id}",
        upstream_path: "legislaturas/{id}",
        category: "Legislaturas",
        description: "Informações extras sobre uma determinada legislatura da Câmara.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/legislaturas/{id}/mesa",
        upstream_path: "legislaturas/{id}/mesa",
        category: "Legislaturas",
        description: "Deputados que fizeram parte da Mesa Diretora.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/legislaturas/{id}/lideres",
        upstream_path: "legislaturas/{id}/lideres",
        category: "Legislaturas",
        description: "Retorna a lista de parlamentares que ocuparam cargos de liderança ao longo da legislatura.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
