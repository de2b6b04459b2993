use crate::reference::Reference;

pub static STATUSES: &[Reference] = &[
    Reference::new(
        "100",
        "Continue",
        "This interim response indicates that the client should continue the \
         request or ignore the response if the request is already finished.\n\n\
         A client that wants to send a large body can send Expect: \
         100-continue and wait for this status before transmitting the body, \
         so that a server that would reject the request does not have to \
         receive it first.",
    ),
    Reference::new(
        "101",
        "Switching Protocols",
        "The server is switching to the protocol the client asked for in its \
         Upgrade request header.\n\n\
         It is most commonly seen when a connection is upgraded from HTTP/1.1 \
         to WebSockets. The response carries an Upgrade header naming the \
         protocol that is now in use.",
    ),
    Reference::new(
        "102",
        "Processing",
        "This code indicates that the server has received and is processing \
         the request, but no response is available yet. It was defined by \
         WebDAV and is deprecated; clients should not rely on it.",
    ),
    Reference::new(
        "103",
        "Early Hints",
        "This status code is primarily intended to be used with the Link \
         header, letting the user agent start preloading resources while the \
         server prepares a response.\n\n\
         A server may send several 103 responses before the final response, \
         for example to hint at stylesheets and fonts while a page is still \
         being rendered.",
    ),
    Reference::new(
        "200",
        "OK",
        "The request succeeded. The meaning of success depends on the HTTP \
         method.\n\n\
         GET: the resource has been fetched and transmitted in the message \
         body. HEAD: the representation headers are included in the response \
         without any message body. PUT or POST: the resource describing the \
         result of the action is transmitted in the message body. TRACE: the \
         message body contains the request message as received by the server.",
    ),
    Reference::new(
        "201",
        "Created",
        "The request succeeded, and a new resource was created as a result. \
         This is typically the response sent after POST requests, or some PUT \
         requests.\n\n\
         The new resource, or a description and link to it, is returned in \
         the body, and its URL is usually given in the Location header.",
    ),
    Reference::new(
        "202",
        "Accepted",
        "The request has been received but not yet acted upon. It is \
         noncommittal, since there is no way in HTTP to later send an \
         asynchronous response indicating the outcome of the request.\n\n\
         It is intended for cases where another process or server handles the \
         request, or for batch processing.",
    ),
    Reference::new(
        "203",
        "Non-Authoritative Information",
        "The returned metadata is not exactly the same as is available from \
         the origin server, but is collected from a local or a third-party \
         copy. This is mostly used for mirrors or backups of another \
         resource. Except for that specific case, the 200 OK response is \
         preferred.",
    ),
    Reference::new(
        "204",
        "No Content",
        "There is no content to send for this request, but the headers may be \
         useful. The user agent may update its cached headers for this \
         resource with the new ones.\n\n\
         A browser receiving 204 after submitting a form stays on the current \
         page rather than navigating.",
    ),
    Reference::new(
        "205",
        "Reset Content",
        "Tells the user agent to reset the document which sent this request, \
         for example to clear a form so that the user can enter another \
         entry.",
    ),
    Reference::new(
        "206",
        "Partial Content",
        "This response code is used when the Range header is sent from the \
         client to request only part of a resource.\n\n\
         A single range is described by the Content-Range header. Several \
         ranges are returned as a multipart/byteranges body, each part \
         carrying its own Content-Range.",
    ),
    Reference::new(
        "207",
        "Multi-Status",
        "Conveys information about multiple resources, for situations where \
         multiple status codes might be appropriate. The body is an XML \
         message defined by WebDAV.",
    ),
    Reference::new(
        "208",
        "Already Reported",
        "Used inside a DAV propstat response element to avoid repeatedly \
         enumerating the internal members of multiple bindings to the same \
         collection.",
    ),
    Reference::new(
        "226",
        "IM Used",
        "The server has fulfilled a GET request for the resource, and the \
         response is a representation of the result of one or more \
         instance-manipulations applied to the current instance. It belongs \
         to delta encoding and is rarely seen.",
    ),
    Reference::new(
        "300",
        "Multiple Choices",
        "The request has more than one possible response. The user agent or \
         user should choose one of them.\n\n\
         There is no standardized way of choosing one of the responses, so in \
         practice this code is rarely used; servers prefer to pick a \
         representation and redirect with 302 or another code.",
    ),
    Reference::new(
        "301",
        "Moved Permanently",
        "The URL of the requested resource has been changed permanently. The \
         new URL is given in the Location header.\n\n\
         Search engines update their links to the resource. Browsers may \
         change the method of a following request from POST to GET; use 308 \
         Permanent Redirect when the method must be kept.",
    ),
    Reference::new(
        "302",
        "Found",
        "This response code means that the URI of the requested resource has \
         been changed temporarily. Further changes in the URI might be made \
         in the future, so the same URI should be used by the client in \
         future requests.\n\n\
         Browsers commonly change POST to GET when following a 302. Use 307 \
         Temporary Redirect when the method must not change.",
    ),
    Reference::new(
        "303",
        "See Other",
        "The server sent this response to direct the client to get the \
         requested resource at another URI with a GET request.\n\n\
         It is typically sent after a PUT or POST, pointing at a confirmation \
         page or the result of an upload, so that reloading the page does not \
         resubmit the form.",
    ),
    Reference::new(
        "304",
        "Not Modified",
        "This is used for caching purposes. It tells the client that the \
         response has not been modified, so the client can continue to use \
         the same cached version of the response.\n\n\
         It is sent in reply to conditional requests carrying If-None-Match \
         or If-Modified-Since. The response must not contain a body.",
    ),
    Reference::new(
        "305",
        "Use Proxy",
        "Defined in a previous version of the HTTP specification to indicate \
         that a requested response must be accessed by a proxy. It has been \
         deprecated due to security concerns regarding in-band configuration \
         of a proxy.",
    ),
    Reference::new(
        "307",
        "Temporary Redirect",
        "The server sends this response to direct the client to get the \
         requested resource at another URI with the same method that was used \
         in the prior request.\n\n\
         This has the same semantics as 302 Found, except that the user agent \
         must not change the HTTP method used: if a POST was used in the \
         first request, a POST must be used in the redirected request.",
    ),
    Reference::new(
        "308",
        "Permanent Redirect",
        "This means that the resource is now permanently located at another \
         URI, specified by the Location header.\n\n\
         This has the same semantics as 301 Moved Permanently, except that \
         the user agent must not change the HTTP method used: if a POST was \
         used in the first request, a POST must be used in the second \
         request.",
    ),
    Reference::new(
        "400",
        "Bad Request",
        "The server cannot or will not process the request due to something \
         that is perceived to be a client error, for example malformed \
         request syntax, invalid request message framing, or deceptive \
         request routing.\n\n\
         The client should not repeat the request without modifications.",
    ),
    Reference::new(
        "401",
        "Unauthorized",
        "Although the HTTP standard specifies unauthorized, semantically this \
         response means unauthenticated. The client must authenticate itself \
         to get the requested response.\n\n\
         The response includes a WWW-Authenticate header describing how to \
         authenticate. A client that retries with valid credentials in the \
         Authorization header may succeed.",
    ),
    Reference::new(
        "402",
        "Payment Required",
        "This response code is reserved for future use. The initial aim was \
         to use it for digital payment systems, but it is used very rarely \
         and no standard convention exists.",
    ),
    Reference::new(
        "403",
        "Forbidden",
        "The client does not have access rights to the content; it is \
         unauthorized, so the server is refusing to give the requested \
         resource.\n\n\
         Unlike 401 Unauthorized, the identity of the client is known to the \
         server, and re-authenticating makes no difference. Access is tied to \
         application logic such as insufficient rights to a resource.",
    ),
    Reference::new(
        "404",
        "Not Found",
        "The server cannot find the requested resource. In the browser, this \
         means the URL is not recognized. In an API, this can also mean that \
         the endpoint is valid but the resource itself does not exist.\n\n\
         Servers may also send this response instead of 403 Forbidden to hide \
         the existence of a resource from an unauthorized client. This is \
         probably the most well known status code due to its frequent \
         occurrence on the web.",
    ),
    Reference::new(
        "405",
        "Method Not Allowed",
        "The request method is known by the server but is not supported by \
         the target resource. For example, an API may not allow DELETE on a \
         resource.\n\n\
         The server must generate an Allow header listing the methods the \
         target resource currently supports.",
    ),
    Reference::new(
        "406",
        "Not Acceptable",
        "This response is sent when the web server, after performing \
         server-driven content negotiation, does not find any content that \
         conforms to the criteria given by the user agent in the Accept, \
         Accept-Encoding or Accept-Language headers.\n\n\
         In practice it is rarely used; servers usually ignore the \
         requirement and send a default representation instead.",
    ),
    Reference::new(
        "407",
        "Proxy Authentication Required",
        "This is similar to 401 Unauthorized but authentication is needed to \
         be done by a proxy. The proxy sends a Proxy-Authenticate header, and \
         the client answers with Proxy-Authorization.",
    ),
    Reference::new(
        "408",
        "Request Timeout",
        "This response is sent on an idle connection by some servers, even \
         without any previous request by the client. It means that the server \
         would like to shut down this unused connection.\n\n\
         Some browsers use HTTP pre-connection mechanisms to speed up \
         browsing, which makes this response more common. Servers should send \
         Connection: close along with it.",
    ),
    Reference::new(
        "409",
        "Conflict",
        "This response is sent when a request conflicts with the current \
         state of the server.\n\n\
         Conflicts are most likely to occur in response to a PUT request, for \
         example when uploading a file that is older than the existing one on \
         the server, resulting in a version control conflict.",
    ),
    Reference::new(
        "410",
        "Gone",
        "This response is sent when the requested content has been \
         permanently deleted from the server, with no forwarding address. \
         Clients are expected to remove their caches and links to the \
         resource.\n\n\
         The specification intends this status code to be used for \
         limited-time, promotional services. APIs should not feel compelled \
         to indicate resources that have been deleted with this status code.",
    ),
    Reference::new(
        "411",
        "Length Required",
        "The server rejected the request because the Content-Length header \
         field is not defined and the server requires it.",
    ),
    Reference::new(
        "412",
        "Precondition Failed",
        "In conditional requests, the client has indicated preconditions in \
         its headers which the server does not meet.\n\n\
         This happens with conditional requests on methods other than GET or \
         HEAD when the condition defined by If-Unmodified-Since or If-Match \
         is not fulfilled, for example to prevent a lost update when two \
         clients edit the same resource.",
    ),
    Reference::new(
        "413",
        "Content Too Large",
        "The request body is larger than limits defined by the server. The \
         server might close the connection or return a Retry-After header \
         field.\n\n\
         Prior to RFC 9110 the response phrase for this status was Payload \
         Too Large.",
    ),
    Reference::new(
        "414",
        "URI Too Long",
        "The URI requested by the client is longer than the server is willing \
         to interpret.\n\n\
         This can happen when a client has improperly converted a POST \
         request to a GET request with long query information, when the \
         client has descended into a loop of redirection, or when the server \
         is under attack by a client attempting to exploit potential security \
         holes.",
    ),
    Reference::new(
        "415",
        "Unsupported Media Type",
        "The media format of the requested data is not supported by the \
         server, so the server is rejecting the request.\n\n\
         The format problem might be due to the request's indicated \
         Content-Type or Content-Encoding, or as a result of inspecting the \
         data directly.",
    ),
    Reference::new(
        "416",
        "Range Not Satisfiable",
        "The ranges specified by the Range header field in the request cannot \
         be fulfilled. It is possible that the range is outside the size of \
         the target resource's data.\n\n\
         The server should include a Content-Range header giving the actual \
         size of the resource, for example Content-Range: bytes */12777.",
    ),
    Reference::new(
        "417",
        "Expectation Failed",
        "This response code means the expectation indicated by the Expect \
         request header field cannot be met by the server.",
    ),
    Reference::new(
        "418",
        "I'm a teapot",
        "The server refuses the attempt to brew coffee with a teapot.\n\n\
         This error is a reference to the Hyper Text Coffee Pot Control \
         Protocol, an April Fools' joke from 1998. Some websites use this \
         response for requests they do not wish to handle, such as automated \
         queries.",
    ),
    Reference::new(
        "421",
        "Misdirected Request",
        "The request was directed at a server that is not able to produce a \
         response. This can be sent by a server that is not configured to \
         produce responses for the combination of scheme and authority that \
         are included in the request URI.\n\n\
         It is most often seen when connection reuse in HTTP/2 sends a \
         request to a server that does not serve that host.",
    ),
    Reference::new(
        "422",
        "Unprocessable Content",
        "The request was well-formed but was unable to be followed due to \
         semantic errors. The content type is understood and the syntax is \
         correct, but the contained instructions cannot be processed.\n\n\
         The client should not repeat this request without modification.",
    ),
    Reference::new(
        "423",
        "Locked",
        "The resource that is being accessed is locked. This status belongs \
         to WebDAV.",
    ),
    Reference::new(
        "424",
        "Failed Dependency",
        "The request failed due to failure of a previous request, for example \
         when a WebDAV PROPPATCH fails because another action in the same \
         request failed.",
    ),
    Reference::new(
        "425",
        "Too Early",
        "Indicates that the server is unwilling to risk processing a request \
         that might be replayed. It is used with TLS early data, where a \
         request sent before the handshake completes could be captured and \
         sent again by an attacker.",
    ),
    Reference::new(
        "426",
        "Upgrade Required",
        "The server refuses to perform the request using the current protocol \
         but might be willing to do so after the client upgrades to a \
         different protocol.\n\n\
         The server sends an Upgrade header in a 426 response to indicate the \
         required protocols.",
    ),
    Reference::new(
        "428",
        "Precondition Required",
        "The origin server requires the request to be conditional. This \
         response is intended to prevent the lost update problem, where a \
         client GETs a resource's state, modifies it and PUTs it back to the \
         server, while a third party has modified the state on the server in \
         the meantime.",
    ),
    Reference::new(
        "429",
        "Too Many Requests",
        "The user has sent too many requests in a given amount of time, a \
         technique known as rate limiting.\n\n\
         A Retry-After header might be included in the response, indicating \
         how long the client should wait before making a new request.",
    ),
    Reference::new(
        "431",
        "Request Header Fields Too Large",
        "The server is unwilling to process the request because its header \
         fields are too large. The request may be resubmitted after reducing \
         the size of the request header fields.\n\n\
         It can be caused by a single oversized header, such as a large \
         Cookie, or by too many headers in total.",
    ),
    Reference::new(
        "451",
        "Unavailable For Legal Reasons",
        "The user agent requested a resource that cannot legally be provided, \
         such as a web page censored by a government.\n\n\
         The number is a reference to Ray Bradbury's novel Fahrenheit 451. \
         Responses should include an explanation in the body and may carry a \
         Link header with rel=\"blocked-by\" identifying the entity \
         implementing the block.",
    ),
    Reference::new(
        "500",
        "Internal Server Error",
        "The server has encountered a situation it does not know how to \
         handle. This is a generic catch-all response when no more specific \
         5xx code is suitable.\n\n\
         The problem usually lies in the server application itself, for \
         example an unhandled exception, and administrators should look in \
         their logs for details.",
    ),
    Reference::new(
        "501",
        "Not Implemented",
        "The request method is not supported by the server and cannot be \
         handled. The only methods that servers are required to support, and \
         therefore that must not return this code, are GET and HEAD.\n\n\
         Unlike 405 Method Not Allowed, this means the server does not \
         recognize the method for any resource. A Retry-After header may tell \
         the client when to check back.",
    ),
    Reference::new(
        "502",
        "Bad Gateway",
        "This error response means that the server, while working as a \
         gateway to get a response needed to handle the request, got an \
         invalid response from the upstream server.\n\n\
         It is commonly seen behind reverse proxies and load balancers when \
         the application behind them crashes or closes the connection \
         unexpectedly.",
    ),
    Reference::new(
        "503",
        "Service Unavailable",
        "The server is not ready to handle the request. Common causes are a \
         server that is down for maintenance or that is overloaded.\n\n\
         A Retry-After header should be sent with this response if possible, \
         containing the estimated time before the recovery of the service. \
         Caching-related headers sent along with it should be considered \
         carefully, as this is a temporary condition.",
    ),
    Reference::new(
        "504",
        "Gateway Timeout",
        "This error response is given when the server is acting as a gateway \
         and cannot get a response in time from the upstream server it needed \
         to access in order to complete the request.",
    ),
    Reference::new(
        "505",
        "HTTP Version Not Supported",
        "The HTTP version used in the request is not supported by the server.",
    ),
    Reference::new(
        "506",
        "Variant Also Negotiates",
        "The server has an internal configuration error: during transparent \
         content negotiation the chosen variant is configured to engage in \
         content negotiation itself, so it is not a proper negotiation \
         endpoint.",
    ),
    Reference::new(
        "507",
        "Insufficient Storage",
        "The method could not be performed on the resource because the server \
         is unable to store the representation needed to successfully \
         complete the request. This status belongs to WebDAV.",
    ),
    Reference::new(
        "508",
        "Loop Detected",
        "The server detected an infinite loop while processing the request. \
         This status belongs to WebDAV and is sent in place of 208 Already \
         Reported when a loop makes the operation impossible.",
    ),
    Reference::new(
        "510",
        "Not Extended",
        "The client request declares an HTTP extension that should be used to \
         process the request, but the extension is not supported by the \
         server.",
    ),
    Reference::new(
        "511",
        "Network Authentication Required",
        "Indicates that the client needs to authenticate to gain network \
         access.\n\n\
         It is generated by intercepting proxies that control access to the \
         network, such as captive portals on public Wi-Fi that require \
         agreeing to terms of service before granting access.",
    ),
];
